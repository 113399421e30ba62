use thiserror::Error;

/// Malformed static definitions, rejected when the definition is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthoringError {
	#[error("route path `{0}` is registered more than once")]
	DuplicateRoutePath(String),
	#[error("route path `{0}` must start with `/`")]
	InvalidRoutePath(String),
	#[error("node id `{0}` is declared more than once")]
	DuplicateNodeId(String),
	#[error("edge id `{0}` is declared more than once")]
	DuplicateEdgeId(String),
	#[error("edge `{edge}` references missing node `{endpoint}`")]
	DanglingEdge { edge: String, endpoint: String },
	#[error("diagram has {count} nodes, at most {max} are supported")]
	TooManyNodes { count: usize, max: usize },
}
