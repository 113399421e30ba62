use log::debug;

use super::layout::ForceLayout;
use super::types::{Diagram, DiagramNode};
use super::viewport::ViewportTransform;
use crate::components::animation::FrameTick;
use crate::components::draw::{Point, Rect};
use crate::config::ViewportConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
	#[default]
	Idle,
	DragNode {
		index: usize,
		pointer_start: Point,
		node_start: Point,
	},
	Pan {
		pointer_start: Point,
		offset_start: Point,
	},
}

/// Interaction state of one mounted diagram: node positions, viewport and gestures.
pub struct DiagramState {
	pub diagram: Diagram,
	pub transform: ViewportTransform,
	pub config: ViewportConfig,
	pub gesture: Gesture,
	pub hover: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	last_tick: Option<FrameTick>,
	layout: Option<ForceLayout>,
}

impl DiagramState {
	pub fn new(diagram: Diagram, width: f64, height: f64, config: ViewportConfig) -> Self {
		let mut state = Self {
			diagram,
			transform: ViewportTransform::default(),
			config,
			gesture: Gesture::Idle,
			hover: None,
			width,
			height,
			flow_time: 0.0,
			last_tick: None,
			layout: None,
		};
		state.fit_view();
		state
	}

	pub fn fit_view(&mut self) {
		if let Some(bounds) = self.diagram.bounds() {
			self.transform = ViewportTransform::fit(bounds, self.width, self.height, &self.config);
			debug!(
				"Fit view: scale {:.3}, offset ({:.1}, {:.1})",
				self.transform.scale, self.transform.offset.x, self.transform.offset.y
			);
		}
	}

	pub fn canvas(&self) -> Rect {
		Rect::new(0.0, 0.0, self.width, self.height)
	}

	/// Topmost node whose box contains the screen point.
	pub fn node_at(&self, screen: Point) -> Option<usize> {
		let world = self.transform.screen_to_world(screen);
		self.diagram
			.nodes()
			.iter()
			.rposition(|node| node.bounds().contains(world))
	}

	pub fn pointer_down(&mut self, p: Point) {
		self.gesture = match self.node_at(p) {
			Some(index) => Gesture::DragNode {
				index,
				pointer_start: p,
				node_start: self.diagram.nodes()[index].position,
			},
			None => Gesture::Pan {
				pointer_start: p,
				offset_start: self.transform.offset,
			},
		};
	}

	pub fn pointer_move(&mut self, p: Point) {
		match self.gesture {
			Gesture::Idle => self.hover = self.node_at(p),
			Gesture::DragNode {
				index,
				pointer_start,
				node_start,
			} => {
				let k = self.transform.scale;
				let position = Point::new(
					node_start.x + (p.x - pointer_start.x) / k,
					node_start.y + (p.y - pointer_start.y) / k,
				);
				self.diagram.set_position(index, position);
				if let Some(layout) = self.layout.as_mut() {
					layout.anchor(index, position);
				}
			}
			Gesture::Pan {
				pointer_start,
				offset_start,
			} => {
				self.transform.offset = offset_start;
				self.transform.pan_by(p.x - pointer_start.x, p.y - pointer_start.y);
			}
		}
	}

	pub fn pointer_up(&mut self) {
		self.gesture = Gesture::Idle;
	}

	pub fn pointer_leave(&mut self) {
		self.gesture = Gesture::Idle;
		self.hover = None;
	}

	/// Wheel zoom around the pointer; positive `delta_y` zooms out.
	/// Events without vertical motion leave the transform alone.
	pub fn wheel(&mut self, p: Point, delta_y: f64) {
		if delta_y == 0.0 || !delta_y.is_finite() {
			return;
		}
		let factor = if delta_y > 0.0 {
			1.0 / self.config.zoom_step
		} else {
			self.config.zoom_step
		};
		self.transform.zoom_at(p, factor, &self.config);
	}

	pub fn zoom_in(&mut self) {
		let centre = self.canvas().center();
		self.transform.zoom_at(centre, self.config.zoom_step, &self.config);
	}

	pub fn zoom_out(&mut self) {
		let centre = self.canvas().center();
		self.transform.zoom_at(centre, 1.0 / self.config.zoom_step, &self.config);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn auto_layout(&self) -> bool {
		self.layout.is_some()
	}

	pub fn set_auto_layout(&mut self, enabled: bool) {
		self.layout = enabled.then(|| ForceLayout::new(&self.diagram));
	}

	/// Follow the frame clock: flow time for animated edges, and one layout step when enabled.
	pub fn advance(&mut self, tick: FrameTick) {
		let dt = self
			.last_tick
			.replace(tick)
			.map(|prev| (tick.time - prev.time).max(0.0))
			.unwrap_or(0.0);
		self.flow_time = tick.time;
		if let Some(layout) = self.layout.as_mut() {
			layout.step(dt as f32, &mut self.diagram);
		}
	}

	/// Current nodes, including dragged positions.
	pub fn node_positions(&self) -> Vec<DiagramNode> {
		self.diagram.nodes().to_vec()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_diagram::types::{DiagramDefinition, DiagramEdge, NodeStyle};

	fn chain_state() -> DiagramState {
		let diagram = Diagram::new(DiagramDefinition {
			nodes: vec![
				DiagramNode::new("1", 250.0, 0.0, "Traffic Dataset", NodeStyle::Source),
				DiagramNode::new("2", 250.0, 100.0, "Dataset Converter", NodeStyle::Stage),
				DiagramNode::new("3", 250.0, 220.0, "Digital Twin", NodeStyle::Simulation),
			],
			edges: vec![
				DiagramEdge::new("e1-2", "1", "2").animated(),
				DiagramEdge::new("e2-3", "2", "3").animated(),
			],
		})
		.unwrap();
		DiagramState::new(diagram, 800.0, 600.0, ViewportConfig::default())
	}

	fn node_centre_on_screen(state: &DiagramState, index: usize) -> Point {
		let node = &state.diagram.nodes()[index];
		state.transform.world_to_screen(node.bounds().center())
	}

	#[test]
	fn mount_fits_every_node_inside_canvas() {
		let state = chain_state();
		for node in state.diagram.nodes() {
			let b = node.bounds();
			for corner in [Point::new(b.x, b.y), Point::new(b.right(), b.bottom())] {
				assert!(state.canvas().contains(state.transform.world_to_screen(corner)));
			}
		}
	}

	#[test]
	fn dragging_a_node_moves_only_that_node() {
		let mut state = chain_state();
		let before_transform = state.transform;
		let others: Vec<Point> = state.diagram.nodes().iter().map(|n| n.position).collect();

		let grab = node_centre_on_screen(&state, 1);
		state.pointer_down(grab);
		state.pointer_move(Point::new(grab.x + 40.0, grab.y - 20.0));
		state.pointer_up();

		let k = state.transform.scale;
		let moved = state.diagram.nodes()[1].position;
		assert!((moved.x - (others[1].x + 40.0 / k)).abs() < 1e-9);
		assert!((moved.y - (others[1].y - 20.0 / k)).abs() < 1e-9);
		assert_eq!(state.diagram.nodes()[0].position, others[0]);
		assert_eq!(state.diagram.nodes()[2].position, others[2]);
		assert_eq!(state.transform, before_transform);

		state.pointer_move(Point::new(0.0, 0.0));
		assert_eq!(state.diagram.nodes()[1].position, moved);
	}

	#[test]
	fn dragging_background_pans_without_moving_nodes() {
		let mut state = chain_state();
		let positions = state.node_positions();
		let start = state.transform.offset;
		state.pointer_down(Point::new(5.0, 5.0));
		state.pointer_move(Point::new(65.0, -25.0));
		state.pointer_up();
		assert_eq!(state.transform.offset, Point::new(start.x + 60.0, start.y - 30.0));
		assert_eq!(state.node_positions(), positions);
	}

	#[test]
	fn wheel_zoom_is_clamped() {
		let mut state = chain_state();
		for _ in 0..200 {
			state.wheel(Point::new(100.0, 100.0), -1.0);
		}
		assert_eq!(state.transform.scale, state.config.max_scale);
		for _ in 0..200 {
			state.zoom_out();
		}
		assert_eq!(state.transform.scale, state.config.min_scale);
	}

	#[test]
	fn horizontal_wheel_does_not_zoom() {
		let mut state = chain_state();
		state.zoom_out();
		state.zoom_out();
		let before = state.transform;
		for delta in [0.0, -0.0, f64::NAN, f64::INFINITY] {
			state.wheel(Point::new(120.0, 80.0), delta);
			assert_eq!(state.transform, before, "{delta}");
		}
		state.wheel(Point::new(120.0, 80.0), 3.0);
		assert!(state.transform.scale < before.scale);
	}

	#[test]
	fn hover_tracks_node_under_pointer() {
		let mut state = chain_state();
		let over = node_centre_on_screen(&state, 2);
		state.pointer_move(over);
		assert_eq!(state.hover, Some(2));
		state.pointer_leave();
		assert_eq!(state.hover, None);
	}

	#[test]
	fn advance_follows_frame_time() {
		let mut state = chain_state();
		let positions = state.node_positions();
		state.advance(FrameTick { frame: 1, time: 0.5 });
		state.advance(FrameTick { frame: 2, time: 0.75 });
		assert_eq!(state.flow_time, 0.75);
		assert_eq!(state.node_positions(), positions);
	}

	#[test]
	fn anchored_node_survives_auto_layout() {
		let mut state = chain_state();
		state.set_auto_layout(true);
		assert!(state.auto_layout());
		let grab = node_centre_on_screen(&state, 0);
		state.pointer_down(grab);
		state.pointer_move(Point::new(grab.x + 30.0, grab.y));
		state.pointer_up();
		let pinned = state.diagram.nodes()[0].position;
		for frame in 1..20 {
			state.advance(FrameTick {
				frame,
				time: frame as f64 * 0.016,
			});
		}
		let after = state.diagram.nodes()[0].position;
		assert!((after.x - pinned.x).abs() < 1e-3 && (after.y - pinned.y).abs() < 1e-3);
	}
}
