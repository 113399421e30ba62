use serde::{Deserialize, Serialize};

use crate::components::draw::{Point, Rect};
use crate::config::ViewportConfig;

/// Pan/zoom applied to diagram coordinates: `screen = world * scale + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
	pub scale: f64,
	pub offset: Point,
}

impl Default for ViewportTransform {
	fn default() -> Self {
		Self {
			scale: 1.0,
			offset: Point::default(),
		}
	}
}

impl ViewportTransform {
	pub fn screen_to_world(&self, p: Point) -> Point {
		Point::new(
			(p.x - self.offset.x) / self.scale,
			(p.y - self.offset.y) / self.scale,
		)
	}

	pub fn world_to_screen(&self, p: Point) -> Point {
		Point::new(
			p.x * self.scale + self.offset.x,
			p.y * self.scale + self.offset.y,
		)
	}

	/// Zoom by `factor`, clamped to the configured range, keeping the world point under `anchor` fixed.
	pub fn zoom_at(&mut self, anchor: Point, factor: f64, config: &ViewportConfig) {
		if !factor.is_finite() || factor <= 0.0 {
			return;
		}
		let new_scale = config.clamp_scale(self.scale * factor);
		let ratio = new_scale / self.scale;
		self.offset.x = anchor.x - (anchor.x - self.offset.x) * ratio;
		self.offset.y = anchor.y - (anchor.y - self.offset.y) * ratio;
		self.scale = new_scale;
	}

	pub fn pan_by(&mut self, dx: f64, dy: f64) {
		self.offset.x += dx;
		self.offset.y += dy;
	}

	/// Transform centring `content` in a `width`×`height` canvas with the configured padding.
	pub fn fit(content: Rect, width: f64, height: f64, config: &ViewportConfig) -> Self {
		let pad = 1.0 + 2.0 * config.fit_padding;
		let fit_x = width / (content.width.max(1.0) * pad);
		let fit_y = height / (content.height.max(1.0) * pad);
		let scale = config.clamp_scale(fit_x.min(fit_y));
		let center = content.center();
		Self {
			scale,
			offset: Point::new(width / 2.0 - center.x * scale, height / 2.0 - center.y * scale),
		}
	}
}
