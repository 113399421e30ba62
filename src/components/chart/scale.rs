use super::types::{Label, Series};

/// Linear value scale. `range` runs from the pixel of `domain.0` to the pixel of `domain.1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	domain: (f64, f64),
	range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		let (lo, mut hi) = domain;
		if (hi - lo).abs() < 1e-12 {
			hi = lo + 1.0;
		}
		Self {
			domain: (lo, hi),
			range,
		}
	}

	pub fn domain(&self) -> (f64, f64) {
		self.domain
	}

	pub fn map(&self, value: f64) -> f64 {
		let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
		self.range.0 + t * (self.range.1 - self.range.0)
	}

	/// `intervals + 1` evenly spaced values covering the domain.
	pub fn ticks(&self, intervals: usize) -> Vec<f64> {
		let intervals = intervals.max(1);
		let (lo, hi) = self.domain;
		(0..=intervals)
			.map(|i| lo + (hi - lo) * i as f64 / intervals as f64)
			.collect()
	}
}

/// Y domain shared by all series: `[0, max]`, widened below zero only for negative data.
pub fn value_domain(series: &[Series]) -> (f64, f64) {
	let (lo, hi) = series
		.iter()
		.flat_map(|s| s.points.iter())
		.map(|p| p.y)
		.filter(|y| y.is_finite())
		.fold((0.0_f64, 0.0_f64), |(lo, hi), y| (lo.min(y), hi.max(y)));
	if hi - lo < 1e-12 { (lo, lo + 1.0) } else { (lo, hi) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CategoryKind {
	/// Categories sit on evenly spaced points, first and last on the range ends.
	Point,
	/// Categories own equal bands; `padding` is the empty fraction of each band.
	Band { padding: f64 },
}

/// Categorical x scale keyed by label order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryScale {
	labels: Vec<Label>,
	start: f64,
	end: f64,
	kind: CategoryKind,
}

impl CategoryScale {
	pub fn new(labels: Vec<Label>, start: f64, end: f64, kind: CategoryKind) -> Self {
		Self {
			labels,
			start,
			end,
			kind,
		}
	}

	pub fn labels(&self) -> &[Label] {
		&self.labels
	}

	pub fn len(&self) -> usize {
		self.labels.len()
	}

	pub fn is_empty(&self) -> bool {
		self.labels.is_empty()
	}

	pub fn index_of(&self, label: &str) -> Option<usize> {
		self.labels.iter().position(|l| l == label)
	}

	fn step(&self) -> f64 {
		let n = self.labels.len() as f64;
		match self.kind {
			CategoryKind::Point if self.labels.len() > 1 => (self.end - self.start) / (n - 1.0),
			CategoryKind::Point => 0.0,
			CategoryKind::Band { .. } => (self.end - self.start) / n.max(1.0),
		}
	}

	/// Centre pixel of category `index`.
	pub fn position(&self, index: usize) -> f64 {
		let step = self.step();
		match self.kind {
			CategoryKind::Point if self.labels.len() <= 1 => (self.start + self.end) / 2.0,
			CategoryKind::Point => self.start + step * index as f64,
			CategoryKind::Band { .. } => self.start + step * (index as f64 + 0.5),
		}
	}

	pub fn bandwidth(&self) -> f64 {
		match self.kind {
			CategoryKind::Point => 0.0,
			CategoryKind::Band { padding } => self.step() * (1.0 - padding.clamp(0.0, 1.0)),
		}
	}

	/// Category bucket under pixel `px`, clamped to the first/last bucket.
	pub fn nearest(&self, px: f64) -> Option<usize> {
		let last = self.labels.len().checked_sub(1)?;
		let step = self.step();
		if step <= 0.0 {
			return Some(0);
		}
		let raw = match self.kind {
			CategoryKind::Point => ((px - self.start) / step).round(),
			CategoryKind::Band { .. } => ((px - self.start) / step).floor(),
		};
		Some(raw.clamp(0.0, last as f64) as usize)
	}
}
