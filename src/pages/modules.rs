use leptos::prelude::*;

struct Module {
	title: &'static str,
	accent: &'static str,
	description: &'static str,
	features: [&'static str; 4],
	tech: &'static str,
}

const MODULES: &[Module] = &[
	Module {
		title: "Dataset Module",
		accent: "accent-blue",
		description: "Ingests and processes public traffic data.",
		features: [
			"CSV Ingestion",
			"Arrival Rate Calculation",
			"Peak-Hour Detection",
			"Pattern Normalization",
		],
		tech: "Pandas, NumPy",
	},
	Module {
		title: "Digital Twin",
		accent: "accent-cyan",
		description: "Virtual replica of the intersection for simulation.",
		features: [
			"SUMO/CityFlow Integration",
			"Vehicle Queue Sim",
			"Lane Density Tracking",
			"Signal Phase Control",
		],
		tech: "SUMO, Python API",
	},
	Module {
		title: "RL Module (PPO)",
		accent: "accent-purple",
		description: "The core decision-making brain of the system.",
		features: [
			"Proximal Policy Optimization",
			"State: Queue & Wait Time",
			"Action: Phase Selection",
			"Reward: Min Wait Time",
		],
		tech: "PyTorch, Stable Baselines3",
	},
	Module {
		title: "Agentic Supervision",
		accent: "accent-red",
		description: "Monitors and corrects the RL agent's learning.",
		features: [
			"Unstable Pattern Detection",
			"Auto-Hyperparameter Tuning",
			"Retraining Triggers",
			"Robustness Checks",
		],
		tech: "Meta-Learning, Heuristics",
	},
	Module {
		title: "Baseline Comparison",
		accent: "accent-gray",
		description: "Benchmarks performance against standard systems.",
		features: [
			"Fixed-Time Control",
			"Max-Pressure Control",
			"Throughput Comparison",
			"Delay Analysis",
		],
		tech: "Statistical Analysis",
	},
	Module {
		title: "Evaluation Metrics",
		accent: "accent-green",
		description: "Quantifies system success and efficiency.",
		features: [
			"Avg Waiting Time",
			"Queue Length",
			"CO2 Emission Est.",
			"Signal Efficiency",
		],
		tech: "Matplotlib, Seaborn",
	},
];

#[component]
pub fn Modules() -> impl IntoView {
	view! {
		<div class="page">
			<header class="page__header">
				<h2>"System Modules"</h2>
				<p>"Detailed breakdown of functional components"</p>
			</header>
			<div class="grid grid--3">
				{MODULES
					.iter()
					.enumerate()
					.map(|(i, module)| {
						view! {
							<div class="card module">
								<div class="module__head">
									<span class=format!("module__icon {}", module.accent) />
									<span class="badge mono">{format!("MOD-0{}", i + 1)}</span>
								</div>
								<h3>{module.title}</h3>
								<p class="muted">{module.description}</p>
								<h4 class="mono muted">"Features"</h4>
								<ul>
									{module.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
								</ul>
								<footer class="mono">
									<span class="muted">"Tech Stack: "</span>
									<span class="accent-primary">{module.tech}</span>
								</footer>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
