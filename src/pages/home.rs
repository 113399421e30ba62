use leptos::prelude::*;
use leptos_router::components::A;

const PILLARS: &[(&str, &str, &str)] = &[
	(
		"Reinforcement Learning",
		"PPO-based adaptive signal control learning from simulated environments.",
		"accent-primary",
	),
	(
		"Digital Twin",
		"Virtual replica of intersections for safe AI training and validation.",
		"accent-blue",
	),
	(
		"Zero Hardware",
		"Purely dataset-driven approach requiring no physical sensors or cameras.",
		"accent-amber",
	),
];

const TECHNOLOGIES: &[&str] = &[
	"Proximal Policy Optimization (PPO)",
	"SUMO / CityFlow Simulation",
	"Agentic AI Supervision",
];

const CONSTRAINTS: &[&str] = &["No IoT Sensors or Cameras", "Public Datasets Only", "System Design Focus"];

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
	view! { <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul> }
}

/// Overview page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="page">
			<section class="hero card">
				<span class="badge mono">"SYSTEM DESIGN DOCUMENT V1.0"</span>
				<h1>"AI-Based Intelligent " <span class="glow">"Traffic Optimization"</span></h1>
				<p>
					"A next-generation traffic signal control system leveraging Reinforcement Learning (PPO), \
					Digital Twins, and Agentic AI supervision to optimize urban mobility without physical sensors."
				</p>
				<div class="hero__actions">
					<A href="/architecture">"Explore Architecture"</A>
					<A href="/modules">"View Modules"</A>
				</div>
			</section>

			<div class="grid grid--3">
				{PILLARS
					.iter()
					.map(|(title, desc, accent)| {
						view! {
							<div class=format!("card {accent}")>
								<h3>{*title}</h3>
								<p>{*desc}</p>
							</div>
						}
					})
					.collect_view()}
			</div>

			<section class="card">
				<h2>"Project Objective"</h2>
				<p>
					"To design an intelligent traffic signal control system that optimizes urban traffic flow using \
					advanced AI techniques, eliminating the need for expensive physical infrastructure."
				</p>
				<div class="grid grid--2">
					<div class="panel">
						<h3 class="mono accent-primary">"Core Technologies"</h3>
						{bullet_list(TECHNOLOGIES)}
					</div>
					<div class="panel">
						<h3 class="mono accent-amber">"Key Constraints"</h3>
						{bullet_list(CONSTRAINTS)}
					</div>
				</div>
			</section>
		</div>
	}
}
