//! Series to drawable primitives: grid, axes, series shapes and legend.

use crate::components::draw::{Fill, Point, Primitive, Rect, Stroke, TextAlign};

use super::scale::{CategoryKind, CategoryScale, LinearScale, value_domain};
use super::types::{ChartKind, Encoding, Label, Series, union_labels};

const BAND_PADDING: f64 = 0.2;
const BAR_RADIUS: f64 = 4.0;
const FONT_SIZE: f64 = 12.0;

/// One rendered chart: resolved scales plus primitives in painter order.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
	pub plot: Rect,
	pub x_scale: CategoryScale,
	pub y_scale: LinearScale,
	pub primitives: Vec<Primitive>,
	/// Number of data points that produced a mark.
	pub drawn_points: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverValue {
	pub series: String,
	pub unit: String,
	pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverReport {
	pub index: usize,
	pub label: Label,
	/// Pixel x of the bucket the pointer snapped to.
	pub x: f64,
	pub values: Vec<HoverValue>,
}

pub fn render(series: &[Series], encoding: &Encoding) -> ChartFrame {
	let m = encoding.margin;
	let plot = Rect::new(
		m.left,
		m.top,
		(encoding.width - m.left - m.right).max(0.0),
		(encoding.height - m.top - m.bottom).max(0.0),
	);
	let category_kind = match encoding.kind {
		ChartKind::Bar => CategoryKind::Band {
			padding: BAND_PADDING,
		},
		ChartKind::Line | ChartKind::Area => CategoryKind::Point,
	};
	let x_scale = CategoryScale::new(union_labels(series), plot.x, plot.right(), category_kind);
	let y_scale = LinearScale::new(value_domain(series), (plot.bottom(), plot.y));

	let mut frame = ChartFrame {
		plot,
		x_scale,
		y_scale,
		primitives: Vec::new(),
		drawn_points: 0,
	};
	draw_grid_and_axes(&mut frame, series, encoding);
	match encoding.kind {
		ChartKind::Line => draw_lines(&mut frame, series, encoding, false),
		ChartKind::Area => draw_lines(&mut frame, series, encoding, true),
		ChartKind::Bar => draw_bars(&mut frame, series, encoding),
	}
	if encoding.show_legend {
		draw_legend(&mut frame, series, encoding);
	}
	frame
}

/// Values of every series at the bucket nearest to `pointer_x`.
pub fn hover(frame: &ChartFrame, series: &[Series], pointer_x: f64) -> Option<HoverReport> {
	let index = frame.x_scale.nearest(pointer_x)?;
	let label = frame.x_scale.labels()[index].clone();
	let values = series
		.iter()
		.map(|s| HoverValue {
			series: s.name.clone(),
			unit: s.unit.clone(),
			value: s.value_at(&label),
		})
		.collect();
	Some(HoverReport {
		index,
		x: frame.x_scale.position(index),
		label,
		values,
	})
}

/// Unit suffix for tick labels when every series agrees on one.
fn shared_unit(series: &[Series]) -> &str {
	match series.split_first() {
		Some((first, rest)) if rest.iter().all(|s| s.unit == first.unit) => &first.unit,
		_ => "",
	}
}

fn format_tick(value: f64, unit: &str) -> String {
	if (value - value.round()).abs() < 1e-9 {
		format!("{}{unit}", value.round())
	} else {
		format!("{value:.1}{unit}")
	}
}

fn draw_grid_and_axes(frame: &mut ChartFrame, series: &[Series], encoding: &Encoding) {
	let plot = frame.plot;
	let axis = encoding.axis_color.css();
	let unit = shared_unit(series);

	for tick in frame.y_scale.ticks(encoding.y_ticks) {
		let y = frame.y_scale.map(tick);
		frame.primitives.push(Primitive::Line {
			from: Point::new(plot.x, y),
			to: Point::new(plot.right(), y),
			stroke: Stroke::solid(encoding.grid_color.css_alpha(0.06), 1.0).dashed(3.0, 3.0, 0.0),
		});
		frame.primitives.push(Primitive::text(
			Point::new(plot.x - 8.0, y),
			format_tick(tick, unit),
			TextAlign::End,
			axis.clone(),
			FONT_SIZE,
		));
	}

	frame.primitives.push(Primitive::Line {
		from: Point::new(plot.x, plot.bottom()),
		to: Point::new(plot.right(), plot.bottom()),
		stroke: Stroke::solid(axis.clone(), 1.0),
	});
	frame.primitives.push(Primitive::Line {
		from: Point::new(plot.x, plot.y),
		to: Point::new(plot.x, plot.bottom()),
		stroke: Stroke::solid(axis.clone(), 1.0),
	});

	if !encoding.show_x_axis {
		return;
	}
	let label_y = plot.bottom() + encoding.margin.bottom / 2.0;
	for (i, label) in frame.x_scale.labels().iter().enumerate() {
		frame.primitives.push(Primitive::text(
			Point::new(frame.x_scale.position(i), label_y),
			label.clone(),
			TextAlign::Center,
			axis.clone(),
			FONT_SIZE,
		));
	}
}

/// Contiguous runs of present points; a label missing from the series breaks the run.
fn runs(frame: &ChartFrame, series: &Series) -> Vec<Vec<Point>> {
	let mut runs = Vec::new();
	let mut current = Vec::new();
	for (i, label) in frame.x_scale.labels().iter().enumerate() {
		match series.value_at(label).filter(|y| y.is_finite()) {
			Some(y) => current.push(Point::new(frame.x_scale.position(i), frame.y_scale.map(y))),
			None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
			None => {}
		}
	}
	if !current.is_empty() {
		runs.push(current);
	}
	runs
}

fn baseline(frame: &ChartFrame) -> f64 {
	let (lo, hi) = frame.y_scale.domain();
	frame.y_scale.map(0.0_f64.clamp(lo, hi))
}

fn draw_lines(frame: &mut ChartFrame, series: &[Series], encoding: &Encoding, filled: bool) {
	let base = baseline(frame);
	for s in series {
		for run in runs(frame, s) {
			frame.drawn_points += run.len();
			if run.len() == 1 {
				frame.primitives.push(Primitive::Circle {
					center: run[0],
					radius: s.line_width(encoding) + 1.0,
					fill: Fill::Solid(s.color.css()),
					alpha: 1.0,
				});
				continue;
			}
			if filled {
				let mut outline = run.clone();
				if let (Some(first), Some(last)) = (run.first(), run.last()) {
					outline.push(Point::new(last.x, base));
					outline.push(Point::new(first.x, base));
				}
				frame.primitives.push(Primitive::Polygon {
					points: outline,
					fill: Fill::VerticalFade {
						top: s.color.css_alpha(0.3),
						bottom: s.color.css_alpha(0.0),
					},
				});
			}
			frame.primitives.push(Primitive::Path {
				points: run,
				stroke: Stroke::solid(s.color.css(), s.line_width(encoding)),
			});
		}
	}
}

fn draw_bars(frame: &mut ChartFrame, series: &[Series], encoding: &Encoding) {
	if series.is_empty() {
		return;
	}
	let base = baseline(frame);
	let slot = frame.x_scale.bandwidth() / series.len() as f64;
	let width = slot.min(encoding.bar_size);
	for (k, s) in series.iter().enumerate() {
		for (i, label) in frame.x_scale.labels().iter().enumerate() {
			let Some(y) = s.value_at(label).filter(|y| y.is_finite()) else {
				continue;
			};
			let group_left = frame.x_scale.position(i) - frame.x_scale.bandwidth() / 2.0;
			let x = group_left + slot * k as f64 + (slot - width) / 2.0;
			let top = frame.y_scale.map(y);
			frame.drawn_points += 1;
			frame.primitives.push(Primitive::Rect {
				rect: Rect::new(x, top.min(base), width, (base - top).abs()),
				radius: BAR_RADIUS,
				rounded_top: true,
				fill: Fill::Solid(encoding.bar_fill(i, s.color).css()),
				stroke: None,
			});
		}
	}
}

fn draw_legend(frame: &mut ChartFrame, series: &[Series], encoding: &Encoding) {
	let y = encoding.margin.top / 2.0;
	let mut x = frame.plot.x;
	for s in series {
		frame.primitives.push(Primitive::Rect {
			rect: Rect::new(x, y - 5.0, 10.0, 10.0),
			radius: 2.0,
			rounded_top: false,
			fill: Fill::Solid(s.color.css()),
			stroke: None,
		});
		frame.primitives.push(Primitive::text(
			Point::new(x + 14.0, y),
			s.name.clone(),
			TextAlign::Start,
			s.color.css(),
			FONT_SIZE,
		));
		// No text metrics here, so advance by an approximate glyph width.
		x += 14.0 + s.name.chars().count() as f64 * FONT_SIZE * 0.6 + 16.0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::draw::Rgb;

	const CYAN: Rgb = Rgb::hex(0x00f0ff);
	const RED: Rgb = Rgb::hex(0xef4444);

	fn paths(frame: &ChartFrame) -> Vec<&Vec<Point>> {
		frame
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Path { points, .. } => Some(points),
				_ => None,
			})
			.collect()
	}

	fn bar_fills(frame: &ChartFrame) -> Vec<String> {
		frame
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Rect {
					fill: Fill::Solid(c),
					rounded_top: true,
					..
				} => Some(c.clone()),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn line_chart_scales_to_max_and_hovers_exact_bucket() {
		let series = vec![Series::new("wait", "s", CYAN).with_points([("0:00", 10.0), ("1:00", 50.0)])];
		let frame = render(&series, &Encoding::of(ChartKind::Line));
		assert_eq!(frame.y_scale.domain(), (0.0, 50.0));
		assert_eq!(frame.drawn_points, 2);

		let report = hover(&frame, &series, frame.x_scale.position(1)).unwrap();
		assert_eq!(report.label, "1:00");
		assert_eq!(report.values[0].value, Some(50.0));

		let left = hover(&frame, &series, frame.plot.x + 1.0).unwrap();
		assert_eq!(left.values[0].value, Some(10.0));
	}

	#[test]
	fn max_point_stays_inside_plot() {
		let series = vec![Series::new("wait", "s", CYAN).with_points([("a", 3.0), ("b", 99.0), ("c", 12.0)])];
		let frame = render(&series, &Encoding::of(ChartKind::Line));
		for p in paths(&frame)[0] {
			assert!(frame.plot.contains(*p), "{p:?} outside {:?}", frame.plot);
		}
	}

	#[test]
	fn empty_series_renders_axes_only() {
		for kind in [ChartKind::Line, ChartKind::Area, ChartKind::Bar] {
			let empty = vec![Series::new("none", "", CYAN)];
			let frame = render(&empty, &Encoding::of(kind));
			assert_eq!(frame.drawn_points, 0);
			assert!(frame.x_scale.is_empty());
			assert!(paths(&frame).is_empty());
			let axis_lines = frame
				.primitives
				.iter()
				.filter(|p| matches!(p, Primitive::Line { stroke, .. } if stroke.dash.is_none()))
				.count();
			assert_eq!(axis_lines, 2);
			assert!(hover(&frame, &empty, 100.0).is_none());
		}
		let frame = render(&[], &Encoding::default());
		assert_eq!(frame.drawn_points, 0);
	}

	#[test]
	fn mismatched_labels_are_unioned_and_gaps_left_undrawn() {
		let series = vec![
			Series::new("baseline", "s", RED).with_points([("0:00", 40.0), ("1:00", 60.0), ("2:00", 55.0)]),
			Series::new("ai", "s", CYAN).with_points([("0:00", 20.0), ("2:00", 25.0), ("3:00", 30.0)]),
		];
		let frame = render(&series, &Encoding::of(ChartKind::Line));
		assert_eq!(frame.x_scale.labels(), ["0:00", "1:00", "2:00", "3:00"]);
		// baseline: one run of three; ai: isolated 0:00 dot plus a 2:00..3:00 run.
		assert_eq!(paths(&frame).len(), 2);
		assert_eq!(frame.drawn_points, 6);

		let gap = hover(&frame, &series, frame.x_scale.position(1)).unwrap();
		assert_eq!(gap.values[0].value, Some(60.0));
		assert_eq!(gap.values[1].value, None);
	}

	#[test]
	fn later_series_paint_over_earlier_ones() {
		let series = vec![
			Series::new("baseline", "s", RED).with_points([("a", 1.0), ("b", 2.0)]),
			Series::new("ai", "s", CYAN).with_points([("a", 2.0), ("b", 1.0)]),
		];
		let frame = render(&series, &Encoding::of(ChartKind::Area));
		let order: Vec<&str> = frame
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Polygon {
					fill: Fill::VerticalFade { top, .. },
					..
				} => Some(top.as_str()),
				_ => None,
			})
			.collect();
		assert_eq!(order, [RED.css_alpha(0.3), CYAN.css_alpha(0.3)]);
	}

	#[test]
	fn bar_emphasis_follows_category_index() {
		let series = vec![Series::new("vehicles", "", CYAN).with_points([
			("Fixed-Time", 1200.0),
			("Max-Pressure", 1450.0),
			("RL Agent (PPO)", 1850.0),
		])];
		let encoding = Encoding::of(ChartKind::Bar).hide_legend().with_emphasis(0);
		let fills = bar_fills(&render(&series, &encoding));
		let muted = encoding.muted.css();
		assert_eq!(fills, [CYAN.css(), muted.clone(), muted]);

		let uniform = bar_fills(&render(&series, &Encoding::of(ChartKind::Bar).hide_legend()));
		assert!(uniform.iter().all(|c| *c == CYAN.css()));
	}

	#[test]
	fn bars_respect_bar_size_and_baseline() {
		let series = vec![Series::new("v", "", CYAN).with_points([("a", 10.0), ("b", 20.0)])];
		let frame = render(&series, &Encoding::of(ChartKind::Bar).hide_legend());
		for p in &frame.primitives {
			if let Primitive::Rect { rect, rounded_top: true, .. } = p {
				assert!(rect.width <= 60.0);
				assert!((rect.bottom() - frame.plot.bottom()).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn tick_labels_carry_shared_unit() {
		let series = vec![Series::new("wait", "s", CYAN).with_points([("a", 40.0)])];
		let frame = render(&series, &Encoding::of(ChartKind::Line));
		let has_suffixed = frame.primitives.iter().any(|p| {
			matches!(p, Primitive::Text { text, align: TextAlign::End, .. } if text == "40s")
		});
		assert!(has_suffixed);
	}

	#[test]
	fn series_stroke_width_overrides_encoding() {
		let series = vec![
			Series::new("baseline", "s", RED).with_points([("a", 1.0), ("b", 2.0)]),
			Series::new("ai", "s", CYAN).with_points([("a", 2.0), ("b", 1.0)]).with_stroke_width(3.0),
		];
		let frame = render(&series, &Encoding::of(ChartKind::Line));
		let widths: Vec<(String, f64)> = frame
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Path { stroke, .. } => Some((stroke.color.clone(), stroke.width)),
				_ => None,
			})
			.collect();
		assert_eq!(widths, vec![(RED.css(), 2.0), (CYAN.css(), 3.0)]);
	}
}
