use leptos::prelude::*;

use crate::components::animation::{self, FrameTick, LoopMarker};

/// A looping vehicle marker and the CSS class giving it shape and colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
	pub marker: LoopMarker,
	pub class: &'static str,
}

impl Vehicle {
	pub fn new(marker: LoopMarker, class: &'static str) -> Self {
		Self { marker, class }
	}
}

fn vehicle_style(marker: &LoopMarker, time: f64) -> String {
	let p = marker.position(time);
	format!(
		"transform: translate({:.1}px, {:.1}px); opacity: {:.3};",
		p.x,
		p.y,
		marker.opacity(time)
	)
}

/// Four-way intersection mock with vehicles moving on the page-wide frame clock.
#[component]
pub fn Intersection(
	vehicles: Vec<Vehicle>,
	#[prop(default = 256.0)] size: f64,
	#[prop(optional)] children: Option<Children>,
) -> impl IntoView {
	let time = RwSignal::new(0.0);
	let subscription = animation::subscribe(move |tick: FrameTick| {
		let _ = time.try_set(tick.time);
	});
	let _subscription = StoredValue::new_local(subscription);

	view! {
		<div class="intersection" style=format!("width: {size}px; height: {size}px;")>
			<div class="intersection__road intersection__road--vertical" />
			<div class="intersection__road intersection__road--horizontal" />
			<div class="intersection__marking intersection__marking--vertical" />
			<div class="intersection__marking intersection__marking--horizontal" />
			{vehicles
				.into_iter()
				.map(|vehicle| {
					let marker = vehicle.marker;
					view! {
						<div
							class=format!("intersection__vehicle {}", vehicle.class)
							style=move || vehicle_style(&marker, time.get())
						/>
					}
				})
				.collect_view()}
			{children.map(|c| c())}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::draw::Point;

	#[test]
	fn style_tracks_marker_position_and_opacity() {
		let marker = LoopMarker::new(Point::new(0.0, 0.0), Point::new(0.0, 200.0), 4.0).with_opacity([0.0, 1.0]);
		assert_eq!(
			vehicle_style(&marker, 1.0),
			"transform: translate(0.0px, 50.0px); opacity: 0.250;"
		);
	}
}
