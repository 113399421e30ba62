use std::collections::HashSet;

use crate::components::draw::Rgb;

pub type Label = String;

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
	pub x: Label,
	pub y: f64,
}

/// Ordered data points; insertion order is rendering order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
	pub name: String,
	pub unit: String,
	pub color: Rgb,
	/// Line width override; falls back to the encoding's.
	pub stroke_width: Option<f64>,
	pub points: Vec<SeriesPoint>,
}

impl Series {
	pub fn new(name: impl Into<String>, unit: impl Into<String>, color: Rgb) -> Self {
		Self {
			name: name.into(),
			unit: unit.into(),
			color,
			stroke_width: None,
			points: Vec::new(),
		}
	}

	pub fn with_stroke_width(mut self, width: f64) -> Self {
		self.stroke_width = Some(width);
		self
	}

	pub fn line_width(&self, encoding: &Encoding) -> f64 {
		self.stroke_width.unwrap_or(encoding.stroke_width)
	}

	pub fn with_points<L: Into<Label>>(mut self, points: impl IntoIterator<Item = (L, f64)>) -> Self {
		self.points.extend(points.into_iter().map(|(x, y)| SeriesPoint { x: x.into(), y }));
		self
	}

	pub fn push(&mut self, x: impl Into<Label>, y: f64) {
		self.points.push(SeriesPoint { x: x.into(), y });
	}

	/// First value recorded under `label`.
	pub fn value_at(&self, label: &str) -> Option<f64> {
		self.points.iter().find(|p| p.x == label).map(|p| p.y)
	}
}

/// Labels of all series, in first-seen order.
pub fn union_labels(series: &[Series]) -> Vec<Label> {
	let mut seen = HashSet::new();
	series
		.iter()
		.flat_map(|s| s.points.iter())
		.filter(|p| seen.insert(p.x.as_str()))
		.map(|p| p.x.clone())
		.collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
	Line,
	Area,
	Bar,
}

/// Authored bar highlight, selected by category index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BarEmphasis {
	#[default]
	Uniform,
	Index(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Encoding {
	pub kind: ChartKind,
	pub width: f64,
	pub height: f64,
	pub margin: Margin,
	pub y_ticks: usize,
	pub stroke_width: f64,
	/// Upper bound on bar width in pixels.
	pub bar_size: f64,
	pub emphasis: BarEmphasis,
	pub muted: Rgb,
	pub axis_color: Rgb,
	pub grid_color: Rgb,
	pub show_x_axis: bool,
	pub show_legend: bool,
}

impl Default for Encoding {
	fn default() -> Self {
		Self {
			kind: ChartKind::Line,
			width: 640.0,
			height: 400.0,
			margin: Margin {
				top: 28.0,
				right: 16.0,
				bottom: 32.0,
				left: 52.0,
			},
			y_ticks: 4,
			stroke_width: 2.0,
			bar_size: 60.0,
			emphasis: BarEmphasis::Uniform,
			muted: Rgb::hex(0x334155),
			axis_color: Rgb::hex(0x64748b),
			grid_color: Rgb(255, 255, 255),
			show_x_axis: true,
			show_legend: true,
		}
	}
}

impl Encoding {
	pub fn of(kind: ChartKind) -> Self {
		Self {
			kind,
			..Self::default()
		}
	}

	pub fn with_size(mut self, width: f64, height: f64) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_emphasis(mut self, index: usize) -> Self {
		self.emphasis = BarEmphasis::Index(index);
		self
	}

	pub fn hide_x_axis(mut self) -> Self {
		self.show_x_axis = false;
		self
	}

	pub fn hide_legend(mut self) -> Self {
		self.show_legend = false;
		self
	}

	pub fn bar_fill(&self, category: usize, color: Rgb) -> Rgb {
		match self.emphasis {
			BarEmphasis::Uniform => color,
			BarEmphasis::Index(i) if i == category => color,
			BarEmphasis::Index(_) => self.muted,
		}
	}
}
