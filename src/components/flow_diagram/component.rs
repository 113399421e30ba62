use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::DiagramState;
use super::types::Diagram;
use crate::components::animation::{self, FrameTick, Subscription};
use crate::components::draw::{Point, paint};
use crate::config::ViewportConfig;

const BACKGROUND: &str = "#020617";

fn draw(state: &DiagramState, ctx: &CanvasRenderingContext2d) {
	paint::clear(ctx, state.width, state.height, Some(BACKGROUND));
	paint::paint(ctx, &render::background_dots(&state.transform, state.width, state.height));
	ctx.save();
	let _ = ctx.translate(state.transform.offset.x, state.transform.offset.y);
	let _ = ctx.scale(state.transform.scale, state.transform.scale);
	paint::paint(ctx, &render::primitives(state));
	ctx.restore();
}

#[component]
pub fn FlowDiagramCanvas(diagram: Diagram, #[prop(default = 600.0)] height: f64) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<DiagramState>>> = Rc::new(RefCell::new(None));
	let subscription = StoredValue::new_local(None::<Subscription>);
	let auto_layout = RwSignal::new(false);
	let state_init = state.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = paint::fit_to_parent(&canvas, 800.0, height);
		let Some(ctx) = paint::context_2d(&canvas) else {
			return;
		};
		*state_init.borrow_mut() = Some(DiagramState::new(
			diagram.clone(),
			w,
			h,
			ViewportConfig::default(),
		));

		let state_frame = state_init.clone();
		subscription.set_value(Some(animation::subscribe(move |tick: FrameTick| {
			if let Some(ref mut s) = *state_frame.borrow_mut() {
				s.advance(tick);
				draw(s, &ctx);
			}
		})));
	});

	let state_rs = state.clone();
	let resize = window_event_listener(ev::resize, move |_| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = paint::fit_to_parent(&canvas, 800.0, height);
		if let Some(ref mut s) = *state_rs.borrow_mut() {
			s.resize(w, h);
		}
	});
	on_cleanup(move || resize.remove());

	let pointer = move |ev: &MouseEvent| -> Option<Point> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		Some(paint::pointer_position(&canvas, ev))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let (Some(p), Some(s)) = (pointer(&ev), state_md.borrow_mut().as_mut()) {
			s.pointer_down(p);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let (Some(p), Some(s)) = (pointer(&ev), state_mm.borrow_mut().as_mut()) {
			s.pointer_move(p);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(s) = state_mu.borrow_mut().as_mut() {
			s.pointer_up();
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(s) = state_ml.borrow_mut().as_mut() {
			s.pointer_leave();
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mouse: &MouseEvent = &ev;
		if let (Some(p), Some(s)) = (pointer(mouse), state_wh.borrow_mut().as_mut()) {
			s.wheel(p, ev.delta_y());
		}
	};

	let control = {
		let state = state.clone();
		move |action: fn(&mut DiagramState)| {
			let state = state.clone();
			move |_: MouseEvent| {
				if let Some(s) = state.borrow_mut().as_mut() {
					action(s);
				}
			}
		}
	};

	let state_al = state.clone();
	let on_auto_layout = move |_: MouseEvent| {
		let enabled = !auto_layout.get_untracked();
		if let Some(s) = state_al.borrow_mut().as_mut() {
			s.set_auto_layout(enabled);
		}
		auto_layout.set(enabled);
	};

	view! {
		<div class="flow-diagram" style=format!("position: relative; height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class="flow-diagram-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<div class="flow-diagram__controls">
				<button title="Zoom in" on:click=control(DiagramState::zoom_in)>
					"+"
				</button>
				<button title="Zoom out" on:click=control(DiagramState::zoom_out)>
					"−"
				</button>
				<button title="Fit view" on:click=control(DiagramState::fit_view)>
					"Fit"
				</button>
				<button
					title="Auto layout"
					class=("active", move || auto_layout.get())
					on:click=on_auto_layout
				>
					"Auto layout"
				</button>
			</div>
		</div>
	}
}
