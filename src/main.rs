use leptos::prelude::*;
use log::error;
use trafficflow_console::{App, init_logging, validate_definitions};

fn main() {
	init_logging();
	if let Err(e) = validate_definitions() {
		error!("Static definitions failed validation: {e}");
	}
	mount_to_body(App);
}
