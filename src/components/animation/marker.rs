use crate::components::draw::Point;

/// A marker travelling `from` → `to` at constant speed once per `cycle` seconds, forever.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopMarker {
	pub from: Point,
	pub to: Point,
	pub cycle: f64,
	/// Seconds before the first cycle starts.
	pub delay: f64,
	/// Opacity keyframes spread evenly over one cycle; empty means opaque.
	pub opacity: Vec<f64>,
}

impl LoopMarker {
	pub fn new(from: Point, to: Point, cycle: f64) -> Self {
		Self {
			from,
			to,
			cycle,
			delay: 0.0,
			opacity: Vec::new(),
		}
	}

	pub fn with_delay(mut self, delay: f64) -> Self {
		self.delay = delay;
		self
	}

	pub fn with_opacity(mut self, keyframes: impl Into<Vec<f64>>) -> Self {
		self.opacity = keyframes.into();
		self
	}

	/// Progress through the current cycle, in `[0, 1)`.
	pub fn phase(&self, time: f64) -> f64 {
		if self.cycle <= 0.0 || !time.is_finite() || time <= self.delay {
			return 0.0;
		}
		(time - self.delay).rem_euclid(self.cycle) / self.cycle
	}

	pub fn position(&self, time: f64) -> Point {
		self.from.lerp(self.to, self.phase(time))
	}

	pub fn opacity(&self, time: f64) -> f64 {
		match self.opacity.as_slice() {
			[] => 1.0,
			[only] => *only,
			keys => {
				let scaled = self.phase(time) * (keys.len() - 1) as f64;
				let i = (scaled.floor() as usize).min(keys.len() - 2);
				let t = scaled - i as f64;
				keys[i] + (keys[i + 1] - keys[i]) * t
			}
		}
	}
}

/// Dash offset for a flowing dashed stroke; one `period` is one dash plus its gap.
pub fn flow_dash_offset(time: f64, period: f64, speed: f64) -> f64 {
	if period <= 0.0 || !time.is_finite() {
		return 0.0;
	}
	-(time * speed).rem_euclid(period)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn south_bound() -> LoopMarker {
		LoopMarker::new(Point::new(0.0, 0.0), Point::new(0.0, 200.0), 3.0)
	}

	#[test]
	fn position_is_linear_within_a_cycle() {
		let marker = south_bound();
		assert_eq!(marker.position(0.0), Point::new(0.0, 0.0));
		assert_eq!(marker.position(1.5), Point::new(0.0, 100.0));
		assert_eq!(marker.position(4.5), Point::new(0.0, 100.0));
	}

	#[test]
	fn cycle_restarts_at_wrap() {
		let marker = south_bound();
		assert_eq!(marker.phase(3.0), 0.0);
		assert_eq!(marker.phase(6.0), marker.phase(0.0));
		assert!(marker.phase(2.999) > 0.99);
	}

	#[test]
	fn delay_holds_the_marker_at_its_start() {
		let marker = south_bound().with_delay(1.0);
		assert_eq!(marker.position(0.5), marker.from);
		assert_eq!(marker.position(2.5), Point::new(0.0, 100.0));
	}

	#[test]
	fn opacity_keyframes_fade_in_and_out() {
		let marker = south_bound().with_opacity([0.0, 1.0, 1.0, 0.0]);
		assert_eq!(marker.opacity(0.0), 0.0);
		assert_eq!(marker.opacity(1.0), 1.0);
		assert_eq!(marker.opacity(1.5), 1.0);
		assert!(marker.opacity(2.9) < 0.2);
		assert_eq!(south_bound().opacity(1.0), 1.0);
	}

	#[test]
	fn dash_offset_stays_within_one_period() {
		for step in 0..200 {
			let offset = flow_dash_offset(step as f64 * 0.05, 10.0, 20.0);
			assert!(offset <= 0.0 && offset > -10.0, "{offset}");
		}
		assert_eq!(flow_dash_offset(1.0, 0.0, 20.0), 0.0);
	}
}
