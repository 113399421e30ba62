use super::state::DiagramState;
use super::types::{DiagramEdge, EdgeKind};
use super::viewport::ViewportTransform;
use crate::components::animation::flow_dash_offset;
use crate::components::draw::{Fill, Point, Primitive, Rect, Rgb, Stroke, TextAlign};

const ARROW_SIZE: f64 = 8.0;
const EDGE_WIDTH: f64 = 2.0;
const DASH: (f64, f64) = (5.0, 5.0);
const FLOW_SPEED: f64 = 20.0;
const STEP_CLEARANCE: f64 = 20.0;
const STEP_DETOUR: f64 = 40.0;
const NODE_RADIUS: f64 = 6.0;
const DOT_GAP: f64 = 20.0;

/// Routed edge in diagram coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGeometry {
	/// Polyline from the source handle to the arrow base.
	pub points: Vec<Point>,
	pub label_anchor: Point,
	/// Arrow head: tip then the two base corners.
	pub arrow: [Point; 3],
}

/// Route an edge from the bottom handle of `source` to the top handle of `target`.
pub fn edge_geometry(kind: EdgeKind, source: Rect, target: Rect) -> EdgeGeometry {
	let start = Point::new(source.center().x, source.bottom());
	let end = Point::new(target.center().x, target.y);
	let mut points = match kind {
		EdgeKind::Straight => vec![start, end],
		EdgeKind::Step if end.y >= start.y => {
			let mid = (start.y + end.y) / 2.0;
			vec![start, Point::new(start.x, mid), Point::new(end.x, mid), end]
		}
		EdgeKind::Step => {
			// Target sits above the source: leave downwards, run up the right side, enter from above.
			let below = start.y + STEP_CLEARANCE;
			let above = end.y - STEP_CLEARANCE;
			let side = source.right().max(target.right()) + STEP_DETOUR;
			vec![
				start,
				Point::new(start.x, below),
				Point::new(side, below),
				Point::new(side, above),
				Point::new(end.x, above),
				end,
			]
		}
	};
	points.dedup();

	let label_anchor = midpoint(&points);
	let arrow = arrow_head(&points);
	if let Some(last) = points.last_mut() {
		*last = arrow_base_centre(&arrow);
	}
	EdgeGeometry {
		points,
		label_anchor,
		arrow,
	}
}

fn arrow_base_centre(arrow: &[Point; 3]) -> Point {
	arrow[1].lerp(arrow[2], 0.5)
}

fn arrow_head(points: &[Point]) -> [Point; 3] {
	let (from, tip) = match points {
		[.., a, b] => (*a, *b),
		[only] => (*only, *only),
		[] => (Point::default(), Point::default()),
	};
	let len = from.distance(tip);
	let (ux, uy) = if len > f64::EPSILON {
		((tip.x - from.x) / len, (tip.y - from.y) / len)
	} else {
		(0.0, 1.0)
	};
	let back = Point::new(tip.x - ux * ARROW_SIZE, tip.y - uy * ARROW_SIZE);
	let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
	[
		tip,
		Point::new(back.x + px, back.y + py),
		Point::new(back.x - px, back.y - py),
	]
}

/// Point halfway along the polyline by length.
pub fn midpoint(points: &[Point]) -> Point {
	let total: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
	let mut remaining = total / 2.0;
	for w in points.windows(2) {
		let len = w[0].distance(w[1]);
		if len >= remaining && len > 0.0 {
			return w[0].lerp(w[1], remaining / len);
		}
		remaining -= len;
	}
	points.first().copied().unwrap_or_default()
}

fn edge_primitives(edge: &DiagramEdge, geometry: EdgeGeometry, flow_time: f64, out: &mut Vec<Primitive>) {
	let color = edge.stroke.css();
	let mut stroke = Stroke::solid(color.clone(), EDGE_WIDTH);
	if edge.animated {
		stroke = stroke.dashed(DASH.0, DASH.1, flow_dash_offset(flow_time, DASH.0 + DASH.1, FLOW_SPEED));
	}
	out.push(Primitive::Path {
		points: geometry.points,
		stroke,
	});
	out.push(Primitive::Polygon {
		points: geometry.arrow.to_vec(),
		fill: Fill::Solid(color),
	});

	if let Some(label) = &edge.label {
		let width = label.chars().count() as f64 * 6.5 + 12.0;
		let anchor = geometry.label_anchor;
		out.push(Primitive::Rect {
			rect: Rect::new(anchor.x - width / 2.0, anchor.y - 9.0, width, 18.0),
			radius: 4.0,
			rounded_top: false,
			fill: Fill::Solid(Rgb::hex(0x0f172a).css()),
			stroke: None,
		});
		out.push(Primitive::text(anchor, label.clone(), TextAlign::Center, Rgb::hex(0xcbd5e1).css(), 11.0));
	}
}

/// Edges, then nodes, in diagram coordinates.
pub fn primitives(state: &DiagramState) -> Vec<Primitive> {
	let diagram = &state.diagram;
	let nodes = diagram.nodes();
	let mut out = Vec::new();

	for (edge, &(src, tgt)) in diagram.edges().iter().zip(diagram.endpoints()) {
		let geometry = edge_geometry(edge.kind, nodes[src].bounds(), nodes[tgt].bounds());
		edge_primitives(edge, geometry, state.flow_time, &mut out);
	}

	for (i, node) in nodes.iter().enumerate() {
		let palette = node.style.palette();
		let hovered = state.hover == Some(i);
		let border = if hovered {
			Stroke::solid(Rgb::hex(0xffffff).css(), palette.border_width + 1.0)
		} else {
			Stroke::solid(palette.border.css(), palette.border_width)
		};
		let bounds = node.bounds();
		out.push(Primitive::Rect {
			rect: bounds,
			radius: NODE_RADIUS,
			rounded_top: false,
			fill: Fill::Solid(palette.fill.css()),
			stroke: Some(border),
		});
		out.push(Primitive::Text {
			anchor: bounds.center(),
			text: node.label.clone(),
			align: TextAlign::Center,
			color: palette.text.css(),
			size: 13.0,
			bold: palette.bold,
		});
	}
	out
}

/// Dot grid in screen coordinates that follows pan and zoom.
pub fn background_dots(transform: &ViewportTransform, width: f64, height: f64) -> Vec<Primitive> {
	let gap = DOT_GAP * transform.scale;
	if gap < 4.0 {
		return Vec::new();
	}
	let fill = Fill::Solid(Rgb::hex(0x334155).css());
	let start_x = transform.offset.x.rem_euclid(gap);
	let start_y = transform.offset.y.rem_euclid(gap);
	let mut dots = Vec::new();
	let mut y = start_y;
	while y <= height {
		let mut x = start_x;
		while x <= width {
			dots.push(Primitive::Circle {
				center: Point::new(x, y),
				radius: 1.0,
				fill: fill.clone(),
				alpha: 1.0,
			});
			x += gap;
		}
		y += gap;
	}
	dots
}
