//! Static configuration for the shell and the diagram viewport.

/// Most nodes a single flow diagram may declare.
pub const MAX_DIAGRAM_NODES: usize = 20;

/// Largest frame delta fed to the animation scheduler, in seconds.
pub const MAX_FRAME_DELTA: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellConfig {
	/// Viewport width (px) at and above which the mobile drawer is ignored.
	pub drawer_breakpoint: f64,
}

impl Default for ShellConfig {
	fn default() -> Self {
		Self {
			drawer_breakpoint: 768.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
	pub min_scale: f64,
	pub max_scale: f64,
	/// Multiplicative zoom applied per wheel notch or zoom button press.
	pub zoom_step: f64,
	/// Fit-view margin on each side, as a fraction of the diagram's bounding box.
	pub fit_padding: f64,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			min_scale: 0.5,
			max_scale: 2.0,
			zoom_step: 1.1,
			fit_padding: 0.1,
		}
	}
}

impl ViewportConfig {
	pub fn clamp_scale(&self, scale: f64) -> f64 {
		scale.clamp(self.min_scale, self.max_scale)
	}
}
