use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

/// Monotonic frame clock shared by every looping animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTick {
	pub frame: u64,
	/// Accumulated seconds since the scheduler started.
	pub time: f64,
}

pub trait FrameListener {
	fn on_frame(&self, tick: FrameTick);
}

impl<F: Fn(FrameTick)> FrameListener for F {
	fn on_frame(&self, tick: FrameTick) {
		self(tick)
	}
}

/// Keeps a listener registered; dropping it unsubscribes.
pub struct Subscription {
	_listener: Rc<dyn FrameListener>,
}

#[derive(Default)]
pub struct AnimationScheduler {
	tick: FrameTick,
	listeners: Vec<(u64, Weak<dyn FrameListener>)>,
	next_id: u64,
}

impl AnimationScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn subscribe(&mut self, listener: impl FrameListener + 'static) -> Subscription {
		let listener: Rc<dyn FrameListener> = Rc::new(listener);
		let id = self.next_id;
		self.next_id += 1;
		self.listeners.push((id, Rc::downgrade(&listener)));
		debug!("Frame listener {id} subscribed");
		Subscription { _listener: listener }
	}

	pub fn listener_count(&self) -> usize {
		self.listeners
			.iter()
			.filter(|(_, l)| l.strong_count() > 0)
			.count()
	}

	/// Advance one frame by `dt` seconds and return the listeners to notify.
	pub fn tick(&mut self, dt: f64) -> (FrameTick, Vec<Weak<dyn FrameListener>>) {
		self.tick.frame = self.tick.frame.wrapping_add(1);
		if dt.is_finite() {
			self.tick.time += dt.max(0.0);
		}
		self.listeners.retain(|(id, l)| {
			let alive = l.strong_count() > 0;
			if !alive {
				debug!("Frame listener {id} dropped");
			}
			alive
		});
		let listeners = self.listeners.iter().map(|(_, l)| l.clone()).collect();
		(self.tick, listeners)
	}
}

/// Tick `scheduler` and notify listeners outside its borrow.
///
/// A listener dropped by an earlier one during this frame is skipped.
pub fn drive(scheduler: &RefCell<AnimationScheduler>, dt: f64) -> FrameTick {
	let (tick, listeners) = scheduler.borrow_mut().tick(dt);
	for listener in listeners {
		if let Some(listener) = listener.upgrade() {
			listener.on_frame(tick);
		}
	}
	tick
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[test]
	fn tick_is_monotonic_and_accumulates_time() {
		let mut scheduler = AnimationScheduler::new();
		let (a, _) = scheduler.tick(0.016);
		let (b, _) = scheduler.tick(0.016);
		let (c, _) = scheduler.tick(-1.0);
		assert_eq!((a.frame, b.frame, c.frame), (1, 2, 3));
		assert!(b.time > a.time);
		assert_eq!(c.time, b.time);
	}

	#[test]
	fn frame_counter_wraps_instead_of_overflowing() {
		let mut scheduler = AnimationScheduler::new();
		scheduler.tick.frame = u64::MAX;
		let (tick, _) = scheduler.tick(0.0);
		assert_eq!(tick.frame, 0);
	}

	#[test]
	fn dropped_subscription_is_no_longer_notified() {
		let scheduler = RefCell::new(AnimationScheduler::new());
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();
		let sub = scheduler
			.borrow_mut()
			.subscribe(move |_: FrameTick| counter.set(counter.get() + 1));

		drive(&scheduler, 0.016);
		assert_eq!(hits.get(), 1);
		drop(sub);
		drive(&scheduler, 0.016);
		assert_eq!(hits.get(), 1);
		assert_eq!(scheduler.borrow().listener_count(), 0);
	}

	#[test]
	fn listener_may_drop_another_mid_frame() {
		let scheduler = RefCell::new(AnimationScheduler::new());
		let victim_hits = Rc::new(Cell::new(0));
		let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

		let slot = victim.clone();
		let _killer = scheduler.borrow_mut().subscribe(move |_: FrameTick| {
			slot.borrow_mut().take();
		});
		let counter = victim_hits.clone();
		*victim.borrow_mut() = Some(
			scheduler
				.borrow_mut()
				.subscribe(move |_: FrameTick| counter.set(counter.get() + 1)),
		);

		drive(&scheduler, 0.016);
		drive(&scheduler, 0.016);
		assert_eq!(victim_hits.get(), 0);
		assert_eq!(scheduler.borrow().listener_count(), 1);
	}

	#[test]
	fn listener_may_subscribe_during_dispatch() {
		let scheduler = Rc::new(RefCell::new(AnimationScheduler::new()));
		let late: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));
		let (inner, store) = (scheduler.clone(), late.clone());
		let _spawner = scheduler.borrow_mut().subscribe(move |_: FrameTick| {
			let sub = inner.borrow_mut().subscribe(|_: FrameTick| {});
			store.borrow_mut().push(sub);
		});
		drive(&scheduler, 0.016);
		assert_eq!(late.borrow().len(), 1);
	}
}
