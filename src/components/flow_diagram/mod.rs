mod component;
mod layout;
pub mod render;
mod state;
mod types;
mod viewport;

pub use component::FlowDiagramCanvas;
pub use layout::ForceLayout;
pub use render::{EdgeGeometry, edge_geometry};
pub use state::{DiagramState, Gesture};
pub use types::{
	Diagram, DiagramDefinition, DiagramEdge, DiagramNode, EdgeKind, NODE_HEIGHT, NODE_WIDTH, NodePalette,
	NodeStyle,
};
pub use viewport::ViewportTransform;
