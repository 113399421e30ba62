use leptos::prelude::*;

use crate::components::draw::Rgb;
use crate::components::flow_diagram::{
	Diagram, DiagramDefinition, DiagramEdge, DiagramNode, FlowDiagramCanvas, NodeStyle,
};

const SLATE: Rgb = Rgb::hex(0x64748b);
const CYAN: Rgb = Rgb::hex(0x00f0ff);
const AMBER: Rgb = Rgb::hex(0xffb700);
const GREEN: Rgb = Rgb::hex(0x22c55e);
const RED: Rgb = Rgb::hex(0xf87171);

const LEGEND: &[(&str, &str)] = &[
	("Data Pipeline", "legend--blue"),
	("State Observation", "legend--cyan"),
	("Control Loop", "legend--amber"),
	("Agent Oversight", "legend--red"),
];

/// Pipeline from raw dataset to optimized timings, with the simulation feedback loop.
pub fn architecture_definition() -> DiagramDefinition {
	DiagramDefinition {
		nodes: vec![
			DiagramNode::new("1", 250.0, 0.0, "Traffic Dataset (CSV)", NodeStyle::Source),
			DiagramNode::new("2", 250.0, 100.0, "Dataset Converter", NodeStyle::Stage),
			DiagramNode::new("3", 250.0, 220.0, "Digital Twin Simulation (SUMO)", NodeStyle::Simulation),
			DiagramNode::new("4", 250.0, 380.0, "RL Environment Interface", NodeStyle::Stage),
			DiagramNode::new("5", 250.0, 500.0, "PPO Decision Agent", NodeStyle::Agent),
			DiagramNode::new("6", 550.0, 500.0, "Agentic AI Supervision", NodeStyle::Supervisor),
			DiagramNode::new("7", 250.0, 620.0, "Optimized Signal Timings", NodeStyle::Output),
		],
		edges: vec![
			DiagramEdge::new("e1-2", "1", "2").animated().stroke(SLATE),
			DiagramEdge::new("e2-3", "2", "3").animated().stroke(SLATE),
			DiagramEdge::new("e3-4", "3", "4").animated().labelled("State Obs").stroke(CYAN),
			DiagramEdge::new("e4-5", "4", "5").animated().stroke(CYAN),
			DiagramEdge::new("e5-7", "5", "7").animated().labelled("Control Actions").stroke(AMBER),
			DiagramEdge::new("e7-3", "7", "3").animated().step().stroke(GREEN),
			DiagramEdge::new("e6-5", "6", "5").animated().labelled("Auto-Tuning").stroke(RED),
		],
	}
}

#[component]
pub fn Architecture() -> impl IntoView {
	let diagram = match Diagram::new(architecture_definition()) {
		Ok(diagram) => view! { <FlowDiagramCanvas diagram=diagram height=650.0 /> }.into_any(),
		Err(e) => view! {
			<div class="fallback-panel">
				<h3>"Diagram unavailable"</h3>
				<p class="mono">{e.to_string()}</p>
			</div>
		}
		.into_any(),
	};

	view! {
		<div class="page">
			<header class="page__header">
				<div>
					<h2>"System Architecture"</h2>
					<p>"High-level data flow and component interaction diagram"</p>
				</div>
				<span class="badge">"v1.0 Schematic"</span>
			</header>
			<div class="diagram-frame">
				<div class="diagram-frame__hint mono">"INTERACTIVE DIAGRAM - ZOOM/PAN ENABLED"</div>
				{diagram}
			</div>
			<div class="grid grid--4">
				{LEGEND
					.iter()
					.map(|(label, class)| {
						view! {
							<div class="legend-item">
								<span class=format!("legend-dot {class}") />
								<span class="mono">{*label}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
