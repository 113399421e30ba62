//! Synthetic telemetry feeding the dashboard and agent views.
//!
//! Values are deterministic so every mount renders the same curves.

use crate::components::chart::Series;
use crate::components::draw::Rgb;

pub const BASELINE: Rgb = Rgb::hex(0xef4444);
pub const AI: Rgb = Rgb::hex(0x00f0ff);
pub const EMISSIONS: Rgb = Rgb::hex(0x22c55e);

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

fn is_peak_hour(hour: usize) -> bool {
	hour > 8 && hour < 19
}

/// 24 hourly samples: fixed-time baseline first, AI optimized on top.
pub fn waiting_time() -> Vec<Series> {
	let mut baseline = Series::new("Fixed-Time Baseline", "s", BASELINE);
	let mut ai = Series::new("AI Optimized", "s", AI).with_stroke_width(3.0);
	for hour in 0..24 {
		let peak = is_peak_hour(hour);
		let label = format!("{hour}:00");
		baseline.push(
			label.clone(),
			40.0 + rand_simple(hour * 2) * 30.0 + if peak { 40.0 } else { 0.0 },
		);
		ai.push(label, 20.0 + rand_simple(hour * 2 + 1) * 15.0 + if peak { 20.0 } else { 0.0 });
	}
	vec![baseline, ai]
}

/// Vehicles cleared per hour under heavy traffic, one bar per controller.
pub fn throughput() -> Vec<Series> {
	vec![Series::new("Vehicles", "", AI).with_points([
		("Fixed-Time", 1200.0),
		("Max-Pressure", 1450.0),
		("RL Agent (PPO)", 1850.0),
	])]
}

/// Daily emission reduction over a week, in percent.
pub fn emissions() -> Vec<Series> {
	vec![
		Series::new("CO₂ Reduction", "%", EMISSIONS)
			.with_points((0..7).map(|day| (format!("Day {}", day + 1), 15.0 + rand_simple(100 + day) * 10.0))),
	]
}

/// Mean reward per 100 training episodes; starts deeply negative.
pub fn training_reward() -> Vec<Series> {
	vec![Series::new("Mean Reward", "", AI).with_points((0..50).map(|i| {
		let reward = -500.0 + (i as f64).powf(1.8) * 1.5 + rand_simple(200 + i) * 50.0;
		((i * 100).to_string(), reward)
	}))]
}
