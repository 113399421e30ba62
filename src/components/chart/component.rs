use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::render::{self, ChartFrame, HoverReport};
use super::types::{Encoding, Series};
use crate::components::draw::paint;

fn format_value(value: Option<f64>, unit: &str) -> String {
	match value {
		Some(v) if v.abs() >= 100.0 => format!("{v:.0}{unit}"),
		Some(v) => format!("{v:.1}{unit}"),
		None => "–".into(),
	}
}

/// Lay the chart out for the canvas' current pixel size.
fn frame_for(series: &[Series], encoding: &Encoding, (width, height): (f64, f64)) -> ChartFrame {
	render::render(series, &encoding.clone().with_size(width, height))
}

#[component]
pub fn ChartCanvas(
	#[prop(into)] series: Signal<Vec<Series>>,
	encoding: Encoding,
	#[prop(default = 400.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame: Rc<RefCell<Option<ChartFrame>>> = Rc::new(RefCell::new(None));
	let hovered = RwSignal::new(None::<HoverReport>);
	let layout_pass = RwSignal::new(0_u32);
	let frame_draw = frame.clone();

	// Re-runs on new data and on every resize so `hover` sees the current scales.
	Effect::new(move |_| {
		layout_pass.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let size = paint::fit_to_parent(&canvas, encoding.width, height);
		let Some(ctx) = paint::context_2d(&canvas) else {
			return;
		};
		let chart = series.with(|s| frame_for(s, &encoding, size));
		paint::clear(&ctx, size.0, size.1, None);
		paint::paint(&ctx, &chart.primitives);
		*frame_draw.borrow_mut() = Some(chart);
		hovered.set(None);
	});

	let resize = window_event_listener(ev::resize, move |_| layout_pass.update(|n| *n = n.wrapping_add(1)));
	on_cleanup(move || resize.remove());

	let frame_mm = frame.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let pointer = paint::pointer_position(&canvas, &ev);
		let report = frame_mm.borrow().as_ref().and_then(|f| {
			if f.plot.contains(pointer) {
				series.with_untracked(|s| render::hover(f, s, pointer.x))
			} else {
				None
			}
		});
		hovered.set(report);
	};

	view! {
		<div class="chart" style=format!("position: relative; height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class="chart-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=move |_| hovered.set(None)
				style="display: block;"
			/>
			{move || {
				hovered
					.get()
					.map(|report| {
						view! {
							<div class="chart-tooltip" style=format!("left: {}px;", report.x + 12.0)>
								<p class="chart-tooltip__label">{report.label.clone()}</p>
								<ul>
									{report
										.values
										.into_iter()
										.map(|v| {
											view! {
												<li>
													{v.series} ": " {format_value(v.value, &v.unit)}
												</li>
											}
										})
										.collect_view()}
								</ul>
							</div>
						}
					})
			}}
		</div>
	}
}
