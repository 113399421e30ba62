use std::collections::{HashMap, HashSet};

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::components::draw::{Point, Rect, Rgb};
use crate::config::MAX_DIAGRAM_NODES;
use crate::error::AuthoringError;

pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 44.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStyle {
	#[default]
	Stage,
	Source,
	Simulation,
	Agent,
	Supervisor,
	Output,
}

pub struct NodePalette {
	pub fill: Rgb,
	pub text: Rgb,
	pub border: Rgb,
	pub border_width: f64,
	pub bold: bool,
}

impl NodeStyle {
	pub fn palette(self) -> NodePalette {
		let (fill, text, border, border_width, bold) = match self {
			NodeStyle::Stage => (0x1e293b, 0xffffff, 0x64748b, 1.0, false),
			NodeStyle::Source => (0x1e293b, 0xffffff, 0x3b82f6, 1.0, false),
			NodeStyle::Simulation => (0x0f172a, 0x00f0ff, 0x00f0ff, 2.0, true),
			NodeStyle::Agent => (0x0f172a, 0xffb700, 0xffb700, 2.0, true),
			NodeStyle::Supervisor => (0x450a0a, 0xf87171, 0xf87171, 1.0, false),
			NodeStyle::Output => (0x1e293b, 0x22c55e, 0x22c55e, 1.0, false),
		};
		NodePalette {
			fill: Rgb::hex(fill),
			text: Rgb::hex(text),
			border: Rgb::hex(border),
			border_width,
			bold,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
	pub id: String,
	/// Top-left corner in diagram coordinates.
	pub position: Point,
	pub label: String,
	pub style: NodeStyle,
}

impl DiagramNode {
	pub fn new(id: impl Into<String>, x: f64, y: f64, label: impl Into<String>, style: NodeStyle) -> Self {
		Self {
			id: id.into(),
			position: Point::new(x, y),
			label: label.into(),
			style,
		}
	}

	pub fn bounds(&self) -> Rect {
		Rect::new(self.position.x, self.position.y, NODE_WIDTH, NODE_HEIGHT)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
	#[default]
	Straight,
	/// Orthogonal routing.
	Step,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub animated: bool,
	pub label: Option<String>,
	pub kind: EdgeKind,
	pub stroke: Rgb,
}

fn default_stroke() -> Rgb {
	Rgb::hex(0x64748b)
}

impl DiagramEdge {
	pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			source: source.into(),
			target: target.into(),
			animated: false,
			label: None,
			kind: EdgeKind::Straight,
			stroke: default_stroke(),
		}
	}

	pub fn animated(mut self) -> Self {
		self.animated = true;
		self
	}

	pub fn labelled(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn step(mut self) -> Self {
		self.kind = EdgeKind::Step;
		self
	}

	pub fn stroke(mut self, color: Rgb) -> Self {
		self.stroke = color;
		self
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramDefinition {
	pub nodes: Vec<DiagramNode>,
	pub edges: Vec<DiagramEdge>,
}

/// A validated directed graph: unique ids and every edge endpoint present.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
	nodes: Vec<DiagramNode>,
	edges: Vec<DiagramEdge>,
	/// `(source, target)` node indices, parallel to `edges`.
	endpoints: Vec<(usize, usize)>,
}

impl Diagram {
	pub fn new(definition: DiagramDefinition) -> Result<Self, AuthoringError> {
		Self::validate(definition)
			.inspect(|d| info!("Diagram built: {} nodes, {} edges", d.nodes.len(), d.edges.len()))
			.inspect_err(|e| error!("Rejected diagram definition: {e}"))
	}

	fn validate(definition: DiagramDefinition) -> Result<Self, AuthoringError> {
		let DiagramDefinition { nodes, edges } = definition;
		if nodes.len() > MAX_DIAGRAM_NODES {
			return Err(AuthoringError::TooManyNodes {
				count: nodes.len(),
				max: MAX_DIAGRAM_NODES,
			});
		}

		let mut index = HashMap::new();
		for (i, node) in nodes.iter().enumerate() {
			if index.insert(node.id.as_str(), i).is_some() {
				return Err(AuthoringError::DuplicateNodeId(node.id.clone()));
			}
		}

		let mut edge_ids = HashSet::new();
		let mut endpoints = Vec::with_capacity(edges.len());
		for edge in &edges {
			if !edge_ids.insert(edge.id.as_str()) {
				return Err(AuthoringError::DuplicateEdgeId(edge.id.clone()));
			}
			let lookup = |id: &str| {
				index.get(id).copied().ok_or_else(|| AuthoringError::DanglingEdge {
					edge: edge.id.clone(),
					endpoint: id.to_string(),
				})
			};
			endpoints.push((lookup(&edge.source)?, lookup(&edge.target)?));
		}

		Ok(Self {
			nodes,
			edges,
			endpoints,
		})
	}

	pub fn nodes(&self) -> &[DiagramNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[DiagramEdge] {
		&self.edges
	}

	pub fn endpoints(&self) -> &[(usize, usize)] {
		&self.endpoints
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn set_position(&mut self, index: usize, position: Point) {
		if let Some(node) = self.nodes.get_mut(index) {
			node.position = position;
		}
	}

	/// Box covering every node, `None` for an empty diagram.
	pub fn bounds(&self) -> Option<Rect> {
		self.nodes
			.iter()
			.map(DiagramNode::bounds)
			.reduce(|acc, b| acc.union(&b))
	}
}
