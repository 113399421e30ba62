use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::primitive::{Fill, Point, Primitive, Rect, Stroke, TextAlign};

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Pointer position relative to the canvas' top-left corner.
pub fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Size the canvas to its parent, falling back to the given size.
pub fn fit_to_parent(canvas: &HtmlCanvasElement, fallback_width: f64, fallback_height: f64) -> (f64, f64) {
	let parent = canvas.parent_element();
	let width = parent
		.as_ref()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(fallback_width);
	let height = parent
		.as_ref()
		.map(|p| p.client_height() as f64)
		.filter(|h| *h > 0.0)
		.unwrap_or(fallback_height);
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
	(width, height)
}

pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64, background: Option<&str>) {
	match background {
		Some(color) => {
			ctx.set_fill_style_str(color);
			ctx.fill_rect(0.0, 0.0, width, height);
		}
		None => ctx.clear_rect(0.0, 0.0, width, height),
	}
}

pub fn paint(ctx: &CanvasRenderingContext2d, primitives: &[Primitive]) {
	for primitive in primitives {
		match primitive {
			Primitive::Line { from, to, stroke } => {
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				apply_stroke(ctx, stroke);
			}
			Primitive::Path { points, stroke } => {
				if trace(ctx, points) {
					apply_stroke(ctx, stroke);
				}
			}
			Primitive::Polygon { points, fill } => {
				if trace(ctx, points) {
					ctx.close_path();
					let (top, bottom) = vertical_extent(points);
					apply_fill(ctx, fill, top, bottom);
				}
			}
			Primitive::Rect {
				rect,
				radius,
				rounded_top,
				fill,
				stroke,
			} => {
				rounded_rect(ctx, rect, *radius, *rounded_top);
				apply_fill(ctx, fill, rect.y, rect.bottom());
				if let Some(stroke) = stroke {
					apply_stroke(ctx, stroke);
				}
			}
			Primitive::Circle {
				center,
				radius,
				fill,
				alpha,
			} => {
				ctx.set_global_alpha(*alpha);
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
				apply_fill(ctx, fill, center.y - radius, center.y + radius);
				ctx.set_global_alpha(1.0);
			}
			Primitive::Text {
				anchor,
				text,
				align,
				color,
				size,
				bold,
			} => {
				ctx.set_fill_style_str(color);
				let weight = if *bold { "bold " } else { "" };
				ctx.set_font(&format!("{weight}{size}px sans-serif"));
				ctx.set_text_align(match align {
					TextAlign::Start => "left",
					TextAlign::Center => "center",
					TextAlign::End => "right",
				});
				ctx.set_text_baseline("middle");
				let _ = ctx.fill_text(text, anchor.x, anchor.y);
			}
		}
	}
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[Point]) -> bool {
	let Some((first, rest)) = points.split_first() else {
		return false;
	};
	ctx.begin_path();
	ctx.move_to(first.x, first.y);
	for p in rest {
		ctx.line_to(p.x, p.y);
	}
	true
}

fn vertical_extent(points: &[Point]) -> (f64, f64) {
	points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
		(lo.min(p.y), hi.max(p.y))
	})
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, radius: f64, rounded_top: bool) {
	let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
	let bottom_r = if rounded_top { 0.0 } else { r };
	let (x, y, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(right, y, right, bottom, r);
	let _ = ctx.arc_to(right, bottom, x, bottom, bottom_r);
	let _ = ctx.arc_to(x, bottom, x, y, bottom_r);
	let _ = ctx.arc_to(x, y, right, y, r);
	ctx.close_path();
}

fn apply_fill(ctx: &CanvasRenderingContext2d, fill: &Fill, top: f64, bottom: f64) {
	match fill {
		Fill::Solid(color) => ctx.set_fill_style_str(color),
		Fill::VerticalFade {
			top: from,
			bottom: to,
		} => {
			let gradient = ctx.create_linear_gradient(0.0, top, 0.0, bottom);
			let _ = gradient.add_color_stop(0.05, from);
			let _ = gradient.add_color_stop(0.95, to);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
	}
	ctx.fill();
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) {
	ctx.set_stroke_style_str(&stroke.color);
	ctx.set_line_width(stroke.width);
	match stroke.dash {
		Some((dash, gap)) => {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(stroke.dash_offset);
		}
		None => {
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
	}
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}
