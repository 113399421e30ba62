//! Leptos client-side shell for the traffic-signal optimization console.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use log::{Level, error, info};

// Modules
pub mod components;
pub mod config;
pub mod error;
pub mod navigation;
mod pages;
pub mod telemetry;

use crate::components::flow_diagram::Diagram;
use crate::components::layout::AppLayout;
use crate::error::AuthoringError;
use crate::navigation::RouteTable;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Check every static definition shipped with the app: the route table and the architecture diagram.
pub fn validate_definitions() -> Result<(), AuthoringError> {
	RouteTable::standard().inspect_err(|e| error!("Rejected route table: {e}"))?;
	Diagram::new(pages::architecture::architecture_definition())?;
	Ok(())
}

/// The application shell, or a fallback panel when the route table is malformed.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let shell = match RouteTable::standard() {
		Ok(table) => view! {
			<Router>
				<AppLayout table=table />
			</Router>
		}
		.into_any(),
		Err(e) => {
			error!("Shell unavailable: {e}");
			view! {
				<div class="fallback-panel">
					<h1>"TrafficFlow console unavailable"</h1>
					<p class="mono">{e.to_string()}</p>
				</div>
			}
			.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="TrafficFlow // System Design" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{shell}
	}
}
