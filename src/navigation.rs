//! Route table and navigation state for the application shell.

use std::collections::HashSet;

use log::{info, warn};

use crate::config::ShellConfig;
use crate::error::AuthoringError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
	Overview,
	Architecture,
	Modules,
	DigitalTwin,
	RlAgent,
	Dashboard,
	NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
	pub path: &'static str,
	pub view: ViewId,
	pub label: &'static str,
}

impl Route {
	pub const fn new(path: &'static str, view: ViewId, label: &'static str) -> Self {
		Self { path, view, label }
	}
}

const STANDARD_ROUTES: &[Route] = &[
	Route::new("/", ViewId::Overview, "Overview"),
	Route::new("/architecture", ViewId::Architecture, "Architecture"),
	Route::new("/modules", ViewId::Modules, "Modules"),
	Route::new("/digital-twin", ViewId::DigitalTwin, "Digital Twin"),
	Route::new("/rl-agent", ViewId::RlAgent, "RL Agent"),
	Route::new("/dashboard", ViewId::Dashboard, "Dashboard"),
];

/// Ordered, validated set of path-to-view bindings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, AuthoringError> {
		let routes: Vec<Route> = routes.into_iter().collect();
		let mut seen = HashSet::new();
		for route in &routes {
			let malformed = !route.path.starts_with('/')
				|| route.path.contains(['?', '#'])
				|| (route.path.len() > 1 && route.path.ends_with('/'));
			if malformed || route.view == ViewId::NotFound {
				return Err(AuthoringError::InvalidRoutePath(route.path.into()));
			}
			if !seen.insert(route.path) {
				return Err(AuthoringError::DuplicateRoutePath(route.path.into()));
			}
		}
		Ok(Self { routes })
	}

	/// The routes shipped with the console.
	pub fn standard() -> Result<Self, AuthoringError> {
		Self::new(STANDARD_ROUTES.iter().copied())
	}

	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Exact lookup; anything not registered byte for byte is `NotFound`.
	pub fn resolve(&self, path: &str) -> ActiveRoute {
		self.routes
			.iter()
			.find(|route| route.path == path)
			.map(|route| ActiveRoute::Registered(*route))
			.unwrap_or_else(|| ActiveRoute::NotFound {
				requested: path.to_string(),
			})
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveRoute {
	Registered(Route),
	NotFound { requested: String },
}

impl ActiveRoute {
	pub fn view(&self) -> ViewId {
		match self {
			Self::Registered(route) => route.view,
			Self::NotFound { .. } => ViewId::NotFound,
		}
	}

	pub fn path(&self) -> Option<&'static str> {
		match self {
			Self::Registered(route) => Some(route.path),
			Self::NotFound { .. } => None,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
	active: ActiveRoute,
	drawer_open: bool,
	config: ShellConfig,
}

impl NavState {
	/// Shell state at mount, bound to the route matching `path`.
	pub fn mount(table: &RouteTable, path: &str, config: ShellConfig) -> Self {
		Self {
			active: table.resolve(path),
			drawer_open: false,
			config,
		}
	}

	pub fn active(&self) -> &ActiveRoute {
		&self.active
	}

	pub fn drawer_open(&self) -> bool {
		self.drawer_open
	}

	/// Returns whether the active route changed.
	pub fn navigate(&mut self, table: &RouteTable, path: &str) -> bool {
		let next = table.resolve(path);
		match &next {
			ActiveRoute::Registered(route) => info!("Navigating to {} ({:?})", route.path, route.view),
			ActiveRoute::NotFound { requested } => warn!("No route registered for {requested}"),
		}
		let changed = next != self.active;
		self.active = next;
		changed
	}

	pub fn toggle_drawer(&mut self) {
		self.drawer_open = !self.drawer_open;
	}

	pub fn drawer_visible(&self, viewport_width: f64) -> bool {
		self.drawer_open && viewport_width < self.config.drawer_breakpoint
	}

	pub fn is_active(&self, path: &str) -> bool {
		self.active.path() == Some(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn shell(path: &str) -> (RouteTable, NavState) {
		let table = RouteTable::standard().unwrap();
		let state = NavState::mount(&table, path, ShellConfig::default());
		(table, state)
	}

	#[test]
	fn every_registered_route_is_exclusively_active() {
		let (table, mut state) = shell("/");
		for route in table.routes() {
			state.navigate(&table, route.path);
			assert_eq!(state.active(), &ActiveRoute::Registered(*route));
			let active: Vec<_> = table.routes().iter().filter(|r| state.is_active(r.path)).collect();
			assert_eq!(active, vec![route]);
		}
	}

	#[test]
	fn unknown_paths_resolve_to_not_found() {
		let (table, mut state) = shell("/dashboard");
		for path in ["", "/nope", "/dashboard/extra", "dashboard", "/DASHBOARD"] {
			state.navigate(&table, path);
			assert_eq!(state.active().view(), ViewId::NotFound, "{path}");
			assert!(table.routes().iter().all(|r| !state.is_active(r.path)));
		}
		state.navigate(&table, "/modules");
		assert_eq!(state.active().view(), ViewId::Modules);
	}

	#[test]
	fn mount_path_selects_initial_route() {
		let (_, state) = shell("/rl-agent");
		assert_eq!(state.active().view(), ViewId::RlAgent);
		assert!(!state.drawer_open());
	}

	#[test]
	fn lookup_matches_registered_paths_exactly() {
		let table = RouteTable::standard().unwrap();
		for path in ["/modules/", "/dashboard?tab=throughput", "/#top", "/Modules", " /modules"] {
			assert_eq!(table.resolve(path), ActiveRoute::NotFound { requested: path.into() });
		}
		assert_eq!(table.resolve("/modules").view(), ViewId::Modules);
	}

	#[test]
	fn navigate_reports_changes() {
		let (table, mut state) = shell("/");
		assert!(!state.navigate(&table, "/"));
		assert!(state.navigate(&table, "/architecture"));
		assert!(state.navigate(&table, "/missing"));
		assert!(state.navigate(&table, "/other-missing"));
	}

	#[test]
	fn drawer_only_shows_below_breakpoint() {
		let (table, mut state) = shell("/");
		state.toggle_drawer();
		assert!(state.drawer_open());
		assert!(state.drawer_visible(400.0));
		assert!(!state.drawer_visible(1280.0));
		state.navigate(&table, "/modules");
		assert!(state.drawer_open());
		state.toggle_drawer();
		assert!(!state.drawer_visible(400.0));
	}

	#[test]
	fn duplicate_and_malformed_paths_are_rejected() {
		let duplicate = RouteTable::new([
			Route::new("/a", ViewId::Overview, "A"),
			Route::new("/a", ViewId::Modules, "A again"),
		]);
		assert_eq!(duplicate, Err(AuthoringError::DuplicateRoutePath("/a".into())));

		let relative = RouteTable::new([Route::new("a", ViewId::Overview, "A")]);
		assert_eq!(relative, Err(AuthoringError::InvalidRoutePath("a".into())));

		let trailing = RouteTable::new([Route::new("/a/", ViewId::Overview, "A")]);
		assert_eq!(trailing, Err(AuthoringError::InvalidRoutePath("/a/".into())));

		let query = RouteTable::new([Route::new("/a?b", ViewId::Overview, "A")]);
		assert_eq!(query, Err(AuthoringError::InvalidRoutePath("/a?b".into())));
	}
}
