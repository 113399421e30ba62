use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn lerp(self, other: Point, t: f64) -> Point {
		Point::new(
			self.x + (other.x - self.x) * t,
			self.y + (other.y - self.y) * t,
		)
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
	}

	/// Smallest rectangle covering both.
	pub fn union(&self, other: &Rect) -> Rect {
		let (x, y) = (self.x.min(other.x), self.y.min(other.y));
		Rect::new(
			x,
			y,
			self.right().max(other.right()) - x,
			self.bottom().max(other.bottom()) - y,
		)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const fn hex(value: u32) -> Self {
		Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
	}

	pub fn css(self) -> String {
		format!("rgb({}, {}, {})", self.0, self.1, self.2)
	}

	pub fn css_alpha(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
	Solid(String),
	/// Linear gradient from the top to the bottom of the shape.
	VerticalFade {
		top: String,
		bottom: String,
	},
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	pub color: String,
	pub width: f64,
	pub dash: Option<(f64, f64)>,
	pub dash_offset: f64,
}

impl Stroke {
	pub fn solid(color: impl Into<String>, width: f64) -> Self {
		Self {
			color: color.into(),
			width,
			dash: None,
			dash_offset: 0.0,
		}
	}

	pub fn dashed(mut self, dash: f64, gap: f64, offset: f64) -> Self {
		self.dash = Some((dash, gap));
		self.dash_offset = offset;
		self
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Start,
	Center,
	End,
}

/// Renderer-agnostic drawing instruction with bound coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	Line {
		from: Point,
		to: Point,
		stroke: Stroke,
	},
	Path {
		points: Vec<Point>,
		stroke: Stroke,
	},
	Polygon {
		points: Vec<Point>,
		fill: Fill,
	},
	/// `radius` rounds the top corners only when `rounded_top` is set, all corners otherwise.
	Rect {
		rect: Rect,
		radius: f64,
		rounded_top: bool,
		fill: Fill,
		stroke: Option<Stroke>,
	},
	Circle {
		center: Point,
		radius: f64,
		fill: Fill,
		alpha: f64,
	},
	Text {
		anchor: Point,
		text: String,
		align: TextAlign,
		color: String,
		size: f64,
		bold: bool,
	},
}

impl Primitive {
	pub fn text(anchor: Point, text: impl Into<String>, align: TextAlign, color: impl Into<String>, size: f64) -> Self {
		Primitive::Text {
			anchor,
			text: text.into(),
			align,
			color: color.into(),
			size,
			bold: false,
		}
	}
}
