use leptos::prelude::*;

use crate::components::chart::{ChartCanvas, ChartKind, Encoding};
use crate::telemetry;

const STATE_SPACE: &[&str] = &["Queue Length", "Wait Time", "Phase", "Density"];
const ACTION_SPACE: &[&str] = &["Switch Phase", "Hold Duration", "Yellow Interval"];
const HYPERPARAMETERS: &[(&str, &str)] = &[
	("Learning Rate", "3e-4"),
	("Gamma (Discount)", "0.99"),
	("Batch Size", "1024"),
];

fn badges(items: &'static [&'static str], class: &'static str) -> impl IntoView {
	view! {
		<div class="badges">
			{items.iter().map(|item| view! { <span class=format!("badge {class}")>{*item}</span> }).collect_view()}
		</div>
	}
}

#[component]
pub fn RlAgent() -> impl IntoView {
	let encoding = Encoding::of(ChartKind::Line).hide_x_axis().hide_legend();

	view! {
		<div class="page">
			<header class="page__header">
				<div>
					<h2>"Reinforcement Learning Agent"</h2>
					<p>"PPO-based intelligent signal controller"</p>
				</div>
				<span class="badge mono accent-purple">"MODEL: PPO_v4_STABLE"</span>
			</header>

			<div class="grid grid--3">
				<section class="card span-2">
					<h3>"Learning Curve (Mean Reward)"</h3>
					<p class="muted">"Convergence progress across training episodes"</p>
					<ChartCanvas series=telemetry::training_reward() encoding=encoding height=350.0 />
				</section>

				<section class="card">
					<h3 class="mono accent-primary">"Agent Configuration"</h3>
					<label class="mono muted">"State Space"</label>
					{badges(STATE_SPACE, "")}
					<label class="mono muted">"Action Space"</label>
					{badges(ACTION_SPACE, "accent-amber")}
					<dl class="params">
						{HYPERPARAMETERS
							.iter()
							.map(|(name, value)| {
								view! {
									<dt>{*name}</dt>
									<dd class="mono">{*value}</dd>
								}
							})
							.collect_view()}
					</dl>
				</section>
			</div>

			<div class="grid grid--2">
				<section class="card">
					<h3 class="accent-primary">"Reward Function Design"</h3>
					<pre class="formula mono">
						"Reward = -α(Σ Queue) - β(Σ Wait) - γ(SwitchingPenalty) + δ(Throughput)"
					</pre>
					<p class="muted">
						"The agent is incentivized to minimize total intersection pressure while penalizing \
						frequent, inefficient signal flickering."
					</p>
				</section>
				<section class="card card--alert">
					<h3 class="accent-red">"Agentic Supervision"</h3>
					<h4>"Anomaly Detection"</h4>
					<p class="muted">
						"Supervisory agent detects reward collapse or oscillating policies during peak hour training."
					</p>
					<h4>"Auto-Tuning"</h4>
					<p class="muted">
						"Automatically adjusts clip range and entropy coefficients to restore learning stability."
					</p>
				</section>
			</div>
		</div>
	}
}
