use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;

use super::scheduler::{AnimationScheduler, FrameListener, Subscription, drive};
use crate::config::MAX_FRAME_DELTA;

thread_local! {
	static DRIVER: RefCell<Option<Rc<FrameDriver>>> = const { RefCell::new(None) };
}

/// `requestAnimationFrame` loop feeding the page-wide scheduler.
struct FrameDriver {
	scheduler: RefCell<AnimationScheduler>,
	last_timestamp: Cell<Option<f64>>,
	callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameDriver {
	fn start() -> Rc<Self> {
		let driver = Rc::new(Self {
			scheduler: RefCell::new(AnimationScheduler::new()),
			last_timestamp: Cell::new(None),
			callback: RefCell::new(None),
		});
		let weak = Rc::downgrade(&driver);
		*driver.callback.borrow_mut() = Some(Closure::new(move |now: f64| {
			if let Some(driver) = weak.upgrade() {
				driver.frame(now);
			}
		}));
		driver.request();
		info!("Animation frame driver started");
		driver
	}

	fn frame(&self, now: f64) {
		let dt = self
			.last_timestamp
			.replace(Some(now))
			.map(|prev| ((now - prev) / 1000.0).clamp(0.0, MAX_FRAME_DELTA))
			.unwrap_or(0.0);
		drive(&self.scheduler, dt);
		self.request();
	}

	fn request(&self) {
		let callback = self.callback.borrow();
		if let (Some(window), Some(cb)) = (web_sys::window(), callback.as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}
}

/// Register `listener` for every display frame until the subscription is dropped.
pub fn subscribe(listener: impl FrameListener + 'static) -> Subscription {
	let driver = DRIVER.with(|slot| slot.borrow_mut().get_or_insert_with(FrameDriver::start).clone());
	driver.scheduler.borrow_mut().subscribe(listener)
}
