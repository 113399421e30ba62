use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::config::ShellConfig;
use crate::navigation::{NavState, RouteTable};
use crate::pages;

fn viewport_width() -> f64 {
	web_sys::window()
		.and_then(|w| w.inner_width().ok())
		.and_then(|v| v.as_f64())
		.unwrap_or(f64::INFINITY)
}

#[component]
fn NavContent(table: RouteTable, nav: RwSignal<NavState>) -> impl IntoView {
	view! {
		<div class="sidebar">
			<div class="sidebar__brand">
				<h1>"TRAFFIC" <span>"FLOW"</span></h1>
				<p class="mono">"v1.0.0 // SYSTEM DESIGN"</p>
			</div>
			<nav class="sidebar__nav">
				{table
					.routes()
					.iter()
					.copied()
					.map(|route| {
						let path = route.path;
						let active = move || nav.with(|n| n.is_active(path));
						view! {
							<A href=path>
								<div class="nav-item" class=("active", active)>
									{route.label}
									{move || active().then(|| view! { <span class="nav-item__pulse" /> })}
								</div>
							</A>
						}
					})
					.collect_view()}
			</nav>
			<div class="sidebar__status mono">
				<p class="online">"SYSTEM ONLINE"</p>
				<p>"UPTIME: 99.9%"</p>
				<p>"LATENCY: 12ms"</p>
			</div>
		</div>
	}
}

/// Sidebar, mobile drawer and the view bound to the active route.
#[component]
pub fn AppLayout(table: RouteTable, #[prop(optional)] config: ShellConfig) -> impl IntoView {
	let location = use_location();
	let nav = RwSignal::new(NavState::mount(
		&table,
		&location.pathname.get_untracked(),
		config,
	));
	let width = RwSignal::new(viewport_width());

	let routes = StoredValue::new(table.clone());
	Effect::new(move |_| {
		let path = location.pathname.get();
		routes.with_value(|t| {
			nav.update(|n| {
				n.navigate(t, &path);
			})
		});
	});

	let resize = window_event_listener(ev::resize, move |_| width.set(viewport_width()));
	on_cleanup(move || resize.remove());

	let active_view = Memo::new(move |_| nav.with(|n| n.active().view()));
	let drawer_visible = move || nav.with(|n| n.drawer_visible(width.get()));

	view! {
		<div class="shell">
			<aside class="shell__sidebar">
				<NavContent table=table.clone() nav=nav />
			</aside>
			<button class="shell__drawer-toggle" on:click=move |_| nav.update(NavState::toggle_drawer)>
				"☰"
			</button>
			<Show when=drawer_visible>
				<div class="shell__backdrop" on:click=move |_| nav.update(NavState::toggle_drawer) />
				<aside class="shell__drawer">
					<NavContent table=routes.get_value() nav=nav />
				</aside>
			</Show>
			<main class="shell__main">
				<div class="shell__content">{move || pages::render_view(active_view.get())}</div>
			</main>
		</div>
	}
}
