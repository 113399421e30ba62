use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"Signal lost: no view is registered at this path."</p>
			<A href="/">"Return to overview"</A>
		</div>
	}
}
