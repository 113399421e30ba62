use trafficflow_console::components::chart::{ChartKind, Encoding, Series, hover, render};
use trafficflow_console::components::draw::{Point, Primitive, Rect, Rgb};
use trafficflow_console::components::flow_diagram::{
	Diagram, DiagramDefinition, DiagramEdge, DiagramNode, DiagramState, NodeStyle, ViewportTransform,
};
use trafficflow_console::config::{ShellConfig, ViewportConfig};
use trafficflow_console::error::AuthoringError;
use trafficflow_console::navigation::{ActiveRoute, NavState, RouteTable, ViewId};

fn chain(n: usize) -> DiagramDefinition {
	DiagramDefinition {
		nodes: (1..=n)
			.map(|i| DiagramNode::new(i.to_string(), 250.0, (i - 1) as f64 * 110.0, format!("Stage {i}"), NodeStyle::Stage))
			.collect(),
		edges: (1..n)
			.map(|i| DiagramEdge::new(format!("e{i}-{}", i + 1), i.to_string(), (i + 1).to_string()).animated())
			.collect(),
	}
}

#[test]
fn every_registered_route_is_exclusively_active() {
	let table = RouteTable::standard().unwrap();
	let mut nav = NavState::mount(&table, "/", ShellConfig::default());
	for route in table.routes() {
		nav.navigate(&table, route.path);
		assert_eq!(nav.active(), &ActiveRoute::Registered(*route));
		let active: Vec<_> = table.routes().iter().filter(|r| nav.is_active(r.path)).collect();
		assert_eq!(active, [route]);
	}
}

#[test]
fn unknown_paths_land_on_not_found() {
	let table = RouteTable::standard().unwrap();
	let mut nav = NavState::mount(&table, "/dashboard", ShellConfig::default());
	for path in ["/nope", "", "dashboard", "/dashboard/extra", "/ARCHITECTURE", "/modules/", "/dashboard?tab=x"] {
		nav.navigate(&table, path);
		assert_eq!(nav.active().view(), ViewId::NotFound, "{path:?}");
		assert!(table.routes().iter().all(|r| !nav.is_active(r.path)));
	}
	nav.navigate(&table, "/");
	assert_eq!(nav.active().view(), ViewId::Overview);
}

#[test]
fn well_formed_graphs_build_and_dangling_edges_are_rejected() {
	for n in 1..=10 {
		assert!(Diagram::new(chain(n)).is_ok());
	}
	let mut def = chain(4);
	def.edges.push(DiagramEdge::new("e4-x", "4", "x"));
	for _ in 0..3 {
		assert_eq!(
			Diagram::new(def.clone()),
			Err(AuthoringError::DanglingEdge {
				edge: "e4-x".into(),
				endpoint: "x".into(),
			})
		);
	}
}

#[test]
fn zoom_converges_to_bounds() {
	let config = ViewportConfig::default();
	let mut t = ViewportTransform::default();
	for _ in 0..60 {
		t.zoom_at(Point::new(50.0, 50.0), config.zoom_step, &config);
		assert!(t.scale <= config.max_scale);
	}
	assert_eq!(t.scale, config.max_scale);
	for _ in 0..60 {
		t.zoom_at(Point::new(50.0, 50.0), 1.0 / config.zoom_step, &config);
		assert!(t.scale >= config.min_scale);
	}
	assert_eq!(t.scale, config.min_scale);
}

#[test]
fn empty_series_renders_bare_frame() {
	for kind in [ChartKind::Line, ChartKind::Area, ChartKind::Bar] {
		let frame = render(&[], &Encoding::of(kind));
		assert_eq!(frame.drawn_points, 0);
		let lines = frame
			.primitives
			.iter()
			.filter(|p| matches!(p, Primitive::Line { .. }))
			.count();
		assert!(lines >= 2);
		assert!(hover(&frame, &[], 100.0).is_none());
	}
}

#[test]
fn dragged_position_survives_serialization() {
	let mut state = DiagramState::new(Diagram::new(chain(3)).unwrap(), 800.0, 600.0, ViewportConfig::default());
	for step in 0..40 {
		if step % 3 == 0 {
			state.zoom_out();
		} else {
			state.wheel(Point::new(310.0 + step as f64, 170.0), -1.0);
		}
		let index = step % 3;
		let grab = state.transform.world_to_screen(state.diagram.nodes()[index].bounds().center());
		state.pointer_down(grab);
		state.pointer_move(Point::new(grab.x + 33.0 + step as f64 * 0.7, grab.y + 17.0 - step as f64 * 1.3));
		state.pointer_up();

		let nodes = state.node_positions();
		let json = serde_json::to_string(&nodes).unwrap();
		let restored: Vec<DiagramNode> = serde_json::from_str(&json).unwrap();
		assert_eq!(restored, nodes, "scale {}", state.transform.scale);

		let transform = serde_json::to_string(&state.transform).unwrap();
		assert_eq!(serde_json::from_str::<ViewportTransform>(&transform).unwrap(), state.transform);
	}
}

#[test]
fn two_point_line_scenario() {
	let series = [Series::new("Wait", "s", Rgb::hex(0x00f0ff)).with_points([("0:00", 10.0), ("1:00", 50.0)])];
	let frame = render(&series, &Encoding::of(ChartKind::Line));
	assert_eq!(frame.y_scale.domain(), (0.0, 50.0));

	let report = hover(&frame, &series, frame.x_scale.position(1)).unwrap();
	assert_eq!(report.label, "1:00");
	assert_eq!(report.values[0].value, Some(50.0));
}

#[test]
fn fit_view_keeps_chain_inside_canvas() {
	let state = DiagramState::new(Diagram::new(chain(3)).unwrap(), 640.0, 480.0, ViewportConfig::default());
	let canvas = Rect::new(0.0, 0.0, 640.0, 480.0);
	for node in state.diagram.nodes() {
		let b = node.bounds();
		assert!(canvas.contains(state.transform.world_to_screen(node.position)));
		assert!(canvas.contains(state.transform.world_to_screen(Point::new(b.right(), b.bottom()))));
	}
}
