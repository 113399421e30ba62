use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{Diagram, NODE_HEIGHT, NODE_WIDTH};
use crate::components::draw::Point;

/// Optional force-directed relaxation of an authored diagram.
///
/// Simulation nodes carry the diagram node index and live at box centres.
pub struct ForceLayout {
	graph: ForceGraph<usize, ()>,
	indices: Vec<DefaultNodeIdx>,
}

fn centre_of(top_left: Point) -> (f32, f32) {
	(
		(top_left.x + NODE_WIDTH / 2.0) as f32,
		(top_left.y + NODE_HEIGHT / 2.0) as f32,
	)
}

impl ForceLayout {
	pub fn new(diagram: &Diagram) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 12000.0,
			force_spring: 0.05,
			force_max: 280.0,
			node_speed: 7000.0,
			damping_factor: 0.9,
		});
		let indices: Vec<DefaultNodeIdx> = diagram
			.nodes()
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let (x, y) = centre_of(node.position);
				graph.add_node(NodeData {
					x,
					y,
					mass: 10.0,
					is_anchor: false,
					user_data: i,
				})
			})
			.collect();
		for &(src, tgt) in diagram.endpoints() {
			if src != tgt {
				graph.add_edge(indices[src], indices[tgt], EdgeData::default());
			}
		}
		Self { graph, indices }
	}

	/// Pin a node at `top_left`; the simulation no longer moves it.
	pub fn anchor(&mut self, node: usize, top_left: Point) {
		let Some(&idx) = self.indices.get(node) else {
			return;
		};
		let (x, y) = centre_of(top_left);
		self.graph.visit_nodes_mut(|n| {
			if n.index() == idx {
				n.data.x = x;
				n.data.y = y;
				n.data.is_anchor = true;
			}
		});
	}

	/// Advance the simulation and copy positions back onto the diagram.
	pub fn step(&mut self, dt: f32, diagram: &mut Diagram) {
		self.graph.update(dt);
		self.graph.visit_nodes(|n| {
			let top_left = Point::new(
				n.x() as f64 - NODE_WIDTH / 2.0,
				n.y() as f64 - NODE_HEIGHT / 2.0,
			);
			diagram.set_position(n.data.user_data, top_left);
		});
	}
}
