use leptos::prelude::*;

use crate::components::animation::LoopMarker;
use crate::components::draw::Point;
use crate::components::intersection::{Intersection, Vehicle};

const SIZE: f64 = 320.0;

const PARAMETERS: &[(&str, &str)] = &[
	("Intersection Type", "4-Way Signalized"),
	("Flow Model", "Krauss Follower"),
	("Lane Layout", "3 Inbound / 3 Outbound"),
	("Update Freq", "10Hz (Real-time)"),
];

const BENEFITS: &[&str] = &[
	"Zero-risk RL exploration",
	"Extreme weather scenario testing",
	"Peak-hour data replay",
	"Infrastructure-free validation",
];

/// Southbound every 4 s; westbound every 5 s after a 1 s delay.
pub fn twin_vehicles() -> Vec<Vehicle> {
	let lane_x = SIZE / 2.0 - 15.0;
	let lane_y = SIZE / 2.0 + 10.0;
	vec![
		Vehicle::new(
			LoopMarker::new(Point::new(lane_x, 0.0), Point::new(lane_x, SIZE), 4.0),
			"vehicle--southbound accent-primary",
		),
		Vehicle::new(
			LoopMarker::new(Point::new(SIZE, lane_y), Point::new(0.0, lane_y), 5.0).with_delay(1.0),
			"vehicle--westbound accent-blue",
		),
	]
}

#[component]
pub fn DigitalTwin() -> impl IntoView {
	view! {
		<div class="page">
			<header class="page__header">
				<h2>"Digital Twin Module"</h2>
				<p>"Virtual replica for safe environment AI training"</p>
			</header>

			<div class="grid grid--3">
				<section class="card span-2 simulation">
					<div class="simulation__head">
						<h3>"Intersection Simulation View"</h3>
						<span class="badge mono">"SUMO_RENDER_v1.2"</span>
					</div>
					<div class="simulation__stage">
						<div class="simulation__badges">
							<span class="badge">"FPS: 60"</span>
							<span class="badge">"ENTITY_COUNT: 42"</span>
						</div>
						<Intersection vehicles=twin_vehicles() size=SIZE />
						<div class="simulation__telemetry mono">
							<div>"LANE_01: " <span class="accent-primary">"ACTIVE"</span></div>
							<div>"QUEUE_LEN: " <span class="accent-amber">"12v"</span></div>
							<div>"WAIT_TIME: " <span class="accent-red">"42s"</span></div>
							<div>"DENSITY: " <span class="accent-blue">"0.82"</span></div>
						</div>
					</div>
				</section>

				<div class="stack">
					<section class="card">
						<h3 class="mono accent-primary">"Simulation Parameters"</h3>
						{PARAMETERS
							.iter()
							.map(|(label, value)| {
								view! {
									<div class="param-row">
										<span class="muted">{*label}</span>
										<span class="mono">{*value}</span>
									</div>
								}
							})
							.collect_view()}
					</section>
					<section class="card">
						<h3 class="mono accent-primary">"Digital Twin Benefits"</h3>
						<ul>{BENEFITS.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}</ul>
					</section>
				</div>
			</div>
		</div>
	}
}
