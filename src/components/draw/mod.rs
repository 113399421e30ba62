pub mod paint;
mod primitive;

pub use primitive::{Fill, Point, Primitive, Rect, Rgb, Stroke, TextAlign};
