use leptos::prelude::*;

use crate::components::animation::LoopMarker;
use crate::components::chart::{ChartCanvas, ChartKind, Encoding};
use crate::components::draw::Point;
use crate::components::intersection::{Intersection, Vehicle};
use crate::telemetry;

const INTERSECTION_SIZE: f64 = 256.0;
const FADE: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
	#[default]
	WaitTime,
	Throughput,
	Emissions,
}

impl DashboardTab {
	pub const ALL: [DashboardTab; 3] = [Self::WaitTime, Self::Throughput, Self::Emissions];

	pub fn label(self) -> &'static str {
		match self {
			Self::WaitTime => "Waiting Time Analysis",
			Self::Throughput => "Throughput Comparison",
			Self::Emissions => "Emission Reduction",
		}
	}

	fn title(self) -> &'static str {
		match self {
			Self::WaitTime => "Average Waiting Time (24h)",
			Self::Throughput => "Vehicle Throughput Comparison",
			Self::Emissions => "Weekly Emission Reduction",
		}
	}

	fn description(self) -> &'static str {
		match self {
			Self::WaitTime => "Comparison between Fixed-Time Baseline and AI Agent",
			Self::Throughput => "Total vehicles cleared per hour under heavy traffic",
			Self::Emissions => "Estimated CO₂ reduction against the fixed-time baseline",
		}
	}

	/// Chart encoding for the tab; the throughput chart emphasizes the RL controller bar.
	pub fn encoding(self) -> Encoding {
		match self {
			Self::WaitTime => Encoding::of(ChartKind::Area),
			Self::Throughput => Encoding::of(ChartKind::Bar).with_emphasis(2).hide_legend(),
			Self::Emissions => Encoding::of(ChartKind::Area).hide_legend(),
		}
	}
}

struct Kpi {
	title: &'static str,
	value: &'static str,
	note: &'static str,
	trend: &'static str,
}

const KPIS: &[Kpi] = &[
	Kpi {
		title: "Avg Wait Time",
		value: "24.5s",
		note: "-35% vs Baseline",
		trend: "trend--good",
	},
	Kpi {
		title: "Throughput",
		value: "1,850",
		note: "Vehicles / Hour",
		trend: "muted",
	},
	Kpi {
		title: "Signal Efficiency",
		value: "92%",
		note: "+12% Optimization",
		trend: "trend--good",
	},
	Kpi {
		title: "Training Episode",
		value: "#4,291",
		note: "Converging...",
		trend: "muted",
	},
];

/// Southbound every 3 s; eastbound every 4 s after a 1 s delay. Both fade in and out.
pub fn live_vehicles() -> Vec<Vehicle> {
	let mid = INTERSECTION_SIZE / 2.0;
	vec![
		Vehicle::new(
			LoopMarker::new(Point::new(mid - 20.0, 0.0), Point::new(mid - 20.0, 200.0), 3.0).with_opacity(FADE),
			"vehicle--southbound accent-cyan",
		),
		Vehicle::new(
			LoopMarker::new(Point::new(0.0, mid + 10.0), Point::new(200.0, mid + 10.0), 4.0)
				.with_delay(1.0)
				.with_opacity(FADE),
			"vehicle--eastbound accent-red",
		),
	]
}

#[component]
pub fn Dashboard() -> impl IntoView {
	let tab = RwSignal::new(DashboardTab::default());

	let chart = move || {
		let current = tab.get();
		let series = match current {
			DashboardTab::WaitTime => telemetry::waiting_time(),
			DashboardTab::Throughput => telemetry::throughput(),
			DashboardTab::Emissions => telemetry::emissions(),
		};
		view! {
			<section class="card">
				<h3>{current.title()}</h3>
				<p class="muted">{current.description()}</p>
				<ChartCanvas series=series encoding=current.encoding() height=400.0 />
			</section>
		}
	};

	view! {
		<div class="page">
			<header class="page__header">
				<div>
					<h2>"Simulation Dashboard"</h2>
					<p>"Real-time visualization of system performance metrics"</p>
				</div>
				<span class="badge badge--live mono">"LIVE SIMULATION"</span>
			</header>

			<div class="grid grid--4">
				{KPIS
					.iter()
					.map(|kpi| {
						view! {
							<div class="card kpi">
								<p class="kpi__title muted">{kpi.title}</p>
								<p class="kpi__value mono">{kpi.value}</p>
								<p class=format!("kpi__note {}", kpi.trend)>{kpi.note}</p>
							</div>
						}
					})
					.collect_view()}
			</div>

			<div class="tabs">
				{DashboardTab::ALL
					.into_iter()
					.map(|t| {
						view! {
							<button class="tabs__trigger" class=("active", move || tab.get() == t) on:click=move |_| tab.set(t)>
								{t.label()}
							</button>
						}
					})
					.collect_view()}
			</div>
			{chart}

			<section class="card">
				<h3>"Live Intersection Digital Twin"</h3>
				<div class="intersection-stage">
					<Intersection vehicles=live_vehicles() size=INTERSECTION_SIZE>
						<span class="signal signal--red" />
						<span class="signal signal--green" />
					</Intersection>
					<div class="intersection-stage__phase mono">
						<p>"Phase: North-South Green"</p>
						<p>"Next Switch: 12s"</p>
					</div>
				</div>
			</section>
		</div>
	}
}
