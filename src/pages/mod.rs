//! One view per registered route, dispatched by `ViewId`.

use leptos::prelude::*;

use crate::navigation::ViewId;

pub mod architecture;
pub mod dashboard;
pub mod digital_twin;
pub mod home;
pub mod modules;
pub mod not_found;
pub mod rl_agent;

pub fn render_view(view: ViewId) -> AnyView {
	match view {
		ViewId::Overview => view! { <home::Home /> }.into_any(),
		ViewId::Architecture => view! { <architecture::Architecture /> }.into_any(),
		ViewId::Modules => view! { <modules::Modules /> }.into_any(),
		ViewId::DigitalTwin => view! { <digital_twin::DigitalTwin /> }.into_any(),
		ViewId::RlAgent => view! { <rl_agent::RlAgent /> }.into_any(),
		ViewId::Dashboard => view! { <dashboard::Dashboard /> }.into_any(),
		ViewId::NotFound => view! { <not_found::NotFound /> }.into_any(),
	}
}
