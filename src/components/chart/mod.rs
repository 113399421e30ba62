mod component;
pub mod render;
pub mod scale;
mod types;

pub use component::ChartCanvas;
pub use render::{ChartFrame, HoverReport, HoverValue, hover, render};
pub use types::{BarEmphasis, ChartKind, Encoding, Label, Margin, Series, SeriesPoint, union_labels};
