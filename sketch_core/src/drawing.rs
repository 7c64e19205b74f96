//! # Recorded Drawings
//!
//! [`Drawing`] is the canvas used for export: it records every primitive in
//! paint order so the exporter can size the page and emit the shapes.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::geometry::{Bounds, Point};
use crate::style::{Color, Stroke, TextStyle};

/// One recorded primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Polyline { points: Vec<Point>, stroke: Stroke },
    Polygon { points: Vec<Point>, fill: Color },
    Text { anchor: Point, content: String, style: TextStyle },
}

impl Shape {
    /// Points that define the extent of this shape
    pub fn points(&self) -> &[Point] {
        match self {
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => points,
            Shape::Text { anchor, .. } => std::slice::from_ref(anchor),
        }
    }
}

/// A legend row: sample stroke plus label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub stroke: Stroke,
}

/// Legend rows in registration order, one per label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a row. Empty labels are ignored; the first stroke registered
    /// for a label wins.
    pub fn add(&mut self, label: &str, stroke: &Stroke) {
        if label.is_empty() || self.entries.iter().any(|e| e.label == label) {
            return;
        }
        self.entries.push(LegendEntry {
            label: label.to_string(),
            stroke: *stroke,
        });
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Recording canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    shapes: Vec<Shape>,
    legend: Legend,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn legend(&self) -> &[LegendEntry] {
        self.legend.entries()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Bounding box of all recorded geometry; text anchors count as points.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.shapes.iter().flat_map(|s| s.points()))
    }

    /// Append everything recorded in `other`
    pub fn extend(&mut self, other: Drawing) {
        self.shapes.extend(other.shapes);
        for entry in other.legend.entries() {
            self.legend.add(&entry.label, &entry.stroke);
        }
    }

    /// Replay the recording onto another canvas
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for shape in &self.shapes {
            match shape {
                Shape::Polyline { points, stroke } => canvas.polyline(points, stroke),
                Shape::Polygon { points, fill } => canvas.fill_polygon(points, *fill),
                Shape::Text { anchor, content, style } => canvas.text(*anchor, content, style),
            }
        }
        for entry in self.legend.entries() {
            canvas.legend_entry(&entry.label, &entry.stroke);
        }
    }
}

impl Canvas for Drawing {
    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        self.shapes.push(Shape::Polyline {
            points: points.to_vec(),
            stroke: *stroke,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) {
        if points.len() < 3 {
            return;
        }
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            fill,
        });
    }

    fn text(&mut self, anchor: Point, content: &str, style: &TextStyle) {
        if content.is_empty() {
            return;
        }
        self.shapes.push(Shape::Text {
            anchor,
            content: content.to_string(),
            style: *style,
        });
    }

    fn legend_entry(&mut self, label: &str, stroke: &Stroke) {
        self.legend.add(label, stroke);
    }
}
