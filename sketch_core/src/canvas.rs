//! # Canvas Abstraction
//!
//! The three plotting primitives the drawing helpers need. Helpers compute
//! geometry in drawing units (y up) and hand it to a [`Canvas`]; the canvas
//! decides how to paint it.
//!
//! Implementations:
//! - [`crate::drawing::Drawing`] records shapes for later export
//! - `FrameCanvas` (feature `iced`) paints straight onto an Iced canvas frame

use crate::geometry::Point;
use crate::style::{Color, Stroke, TextStyle};

/// A 2D surface the drawing helpers render onto.
pub trait Canvas {
    /// Stroke an open polyline through `points`
    fn polyline(&mut self, points: &[Point], stroke: &Stroke);

    /// Fill the closed polygon through `points`
    fn fill_polygon(&mut self, points: &[Point], fill: Color);

    /// Place `content` at `anchor`
    fn text(&mut self, anchor: Point, content: &str, style: &TextStyle);

    /// Register a legend entry. Surfaces without a legend ignore it.
    fn legend_entry(&mut self, _label: &str, _stroke: &Stroke) {}
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        (**self).polyline(points, stroke)
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) {
        (**self).fill_polygon(points, fill)
    }

    fn text(&mut self, anchor: Point, content: &str, style: &TextStyle) {
        (**self).text(anchor, content, style)
    }

    fn legend_entry(&mut self, label: &str, stroke: &Stroke) {
        (**self).legend_entry(label, stroke)
    }
}
