pub mod animation;
pub mod chart;
pub mod draw;
pub mod flow_diagram;
pub mod intersection;
pub mod layout;
