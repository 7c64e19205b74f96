//! # Vectors
//!
//! A vector is a line with an arrowhead at its tip, optionally annotated
//! with a label on one side and its magnitude/angle on the other. Every
//! other helper that needs an arrow (dimensions, distributed loads, moment
//! pairs) goes through [`draw_vector`].
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::drawing::Drawing;
//! use sketch_core::geometry::Point;
//! use sketch_core::vector::{draw_vector, VectorOptions};
//!
//! let mut drawing = Drawing::new();
//! let opts = VectorOptions {
//!     show_magnitude: true,
//!     ..VectorOptions::labelled("F")
//! };
//! draw_vector(&mut drawing, Point::new(0.0, 0.0), Point::new(3.0, 4.0), &opts).unwrap();
//! assert_eq!(drawing.len(), 3); // arrow, label, magnitude
//! ```

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::errors::{SketchError, SketchResult};
use crate::geometry::{sign_or_zero, Point};
use crate::style::{HAlign, LineFormat, TextStyle, VAlign, DEFAULT_LINE_WIDTH_PT};
use crate::units::Degrees;

/// Half-width of the arrowhead relative to its length
const ARROW_HALF_WIDTH: f64 = 0.45;

/// Where vector annotations go relative to the vector's midpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelOffset {
    /// Distance along the vector's normal; the side follows the sign of the
    /// vector's angle
    Distance(f64),
    /// Explicit displacement of the label; magnitude/angle text goes to the
    /// mirrored position
    Direction(f64, f64),
}

impl Default for LabelOffset {
    fn default() -> Self {
        LabelOffset::Distance(1.0)
    }
}

/// Options for [`draw_vector`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorOptions {
    pub line: LineFormat,
    pub width_pt: f64,
    pub label: String,
    pub show_label: bool,
    pub show_magnitude: bool,
    pub show_angle: bool,
    pub show_legend: bool,
    /// Rotate annotations to follow the vector
    pub aligned: bool,
    /// Arrowhead length as a fraction of the vector length; 0 draws a bare line
    pub arrow_scale: f64,
    pub offset: LabelOffset,
    /// Font settings for annotations (alignment is always centered)
    pub text: TextStyle,
}

impl Default for VectorOptions {
    fn default() -> Self {
        VectorOptions {
            line: LineFormat::default(),
            width_pt: DEFAULT_LINE_WIDTH_PT,
            label: String::new(),
            show_label: true,
            show_magnitude: false,
            show_angle: false,
            show_legend: true,
            aligned: false,
            arrow_scale: 0.02,
            offset: LabelOffset::default(),
            text: TextStyle::centered(),
        }
    }
}

impl VectorOptions {
    /// Default options with a label
    pub fn labelled(label: impl Into<String>) -> Self {
        VectorOptions {
            label: label.into(),
            ..VectorOptions::default()
        }
    }

    /// Bare arrow: no label, no legend entry
    pub fn plain(line: LineFormat, arrow_scale: f64) -> Self {
        VectorOptions {
            line,
            show_label: false,
            show_legend: false,
            arrow_scale,
            ..VectorOptions::default()
        }
    }
}

/// Polyline of a vector from `from` to `to`, arrowhead included.
///
/// With `arrow_scale == 0` this is just the segment; otherwise the head is
/// traced `tip -> left barb -> right barb -> tip`.
pub fn arrow_points(from: Point, to: Point, arrow_scale: f64) -> Vec<Point> {
    if arrow_scale == 0.0 {
        return vec![from, to];
    }
    let aw = (to - from) * arrow_scale;
    let h = ARROW_HALF_WIDTH;
    vec![
        from,
        to,
        Point::new(to.x - aw.y * h - aw.x, to.y + aw.x * h - aw.y),
        Point::new(to.x + aw.y * h - aw.x, to.y - aw.x * h - aw.y),
        to,
    ]
}

/// Magnitude/angle annotation text, `None` when neither is requested
fn measure_text(magnitude: f64, angle: Degrees, opts: &VectorOptions) -> Option<String> {
    match (opts.show_magnitude, opts.show_angle) {
        (true, true) => Some(format!("{:.2} ∠ {:.2}°", magnitude, angle.0)),
        (true, false) => Some(format!("{:.2}", magnitude)),
        (false, true) => Some(format!("∠ {:.2}°", angle.0)),
        (false, false) => None,
    }
}

/// Draw a vector (line with arrowhead) with optional annotations.
///
/// Fails on a zero-length or non-finite vector.
pub fn draw_vector(canvas: &mut impl Canvas, from: Point, to: Point, opts: &VectorOptions) -> SketchResult<()> {
    let d = to - from;
    let magnitude = d.length();
    if !magnitude.is_finite() || magnitude == 0.0 {
        return Err(SketchError::invalid_input(
            "vector",
            format!("({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y),
            "Vector must have a finite, non-zero length",
        ));
    }
    let angle = Degrees(d.y.atan2(d.x).to_degrees());
    let center = from.midpoint(to);

    let stroke = opts.line.stroke(opts.width_pt);
    canvas.polyline(&arrow_points(from, to, opts.arrow_scale), &stroke);
    if opts.show_legend {
        canvas.legend_entry(&opts.label, &stroke);
    }

    let text_angle = if opts.aligned {
        Degrees((d.y / d.x).atan().to_degrees())
    } else {
        Degrees::ZERO
    };
    let style = TextStyle {
        h_align: HAlign::Center,
        v_align: VAlign::Center,
        rotation: text_angle,
        ..opts.text
    };

    // `u` runs along the vector, flipped for negative angles; labels sit on
    // its normal so they stay on the same visual side
    let (u, distance) = match opts.offset {
        LabelOffset::Distance(distance) => (d * (sign_or_zero(angle.0) / magnitude), distance),
        LabelOffset::Direction(dx, dy) => (Point::new(-dy, dx), 1.0),
    };
    let side = Point::new(u.y, -u.x) * distance;

    if opts.show_label {
        canvas.text(center + side, &opts.label, &style);
    }
    if let Some(text) = measure_text(magnitude, angle, opts) {
        canvas.text(center - side, &text, &style);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Drawing, Shape};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn texts(drawing: &Drawing) -> Vec<(Point, String, TextStyle)> {
        drawing
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Text { anchor, content, style } => Some((*anchor, content.clone(), *style)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_arrowhead_geometry() {
        let pts = arrow_points(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.1);
        assert_eq!(pts.len(), 5);
        // aw = (1, 0): barbs one unit back, 0.45 to each side
        assert!(close(pts[2], Point::new(9.0, 0.45)));
        assert!(close(pts[3], Point::new(9.0, -0.45)));
        assert_eq!(pts[4], pts[1]);
    }

    #[test]
    fn test_zero_arrow_scale_is_bare_line() {
        let pts = arrow_points(Point::new(1.0, 1.0), Point::new(2.0, 5.0), 0.0);
        assert_eq!(pts, vec![Point::new(1.0, 1.0), Point::new(2.0, 5.0)]);
    }

    #[test]
    fn test_zero_length_vector_is_rejected() {
        let mut drawing = Drawing::new();
        let p = Point::new(2.0, 2.0);
        let err = draw_vector(&mut drawing, p, p, &VectorOptions::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_label_and_magnitude_sit_on_opposite_sides() {
        let mut drawing = Drawing::new();
        let opts = VectorOptions {
            show_magnitude: true,
            show_angle: true,
            ..VectorOptions::labelled("P")
        };
        draw_vector(&mut drawing, Point::new(0.0, 0.0), Point::new(0.0, 4.0), &opts).unwrap();

        let texts = texts(&drawing);
        assert_eq!(texts.len(), 2);
        // Vertical up: angle 90, u = (0, 1), label to the right
        assert!(close(texts[0].0, Point::new(1.0, 2.0)));
        assert_eq!(texts[0].1, "P");
        assert!(close(texts[1].0, Point::new(-1.0, 2.0)));
        assert_eq!(texts[1].1, "4.00 ∠ 90.00°");
    }

    #[test]
    fn test_horizontal_rightward_label_stays_on_line() {
        let mut drawing = Drawing::new();
        draw_vector(
            &mut drawing,
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            &VectorOptions::labelled("L"),
        )
        .unwrap();
        let texts = texts(&drawing);
        assert!(close(texts[0].0, Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_direction_offset_places_label_explicitly() {
        let mut drawing = Drawing::new();
        let opts = VectorOptions {
            show_angle: true,
            offset: LabelOffset::Direction(0.5, -0.25),
            ..VectorOptions::labelled("F")
        };
        draw_vector(&mut drawing, Point::new(0.0, 0.0), Point::new(2.0, 2.0), &opts).unwrap();
        let texts = texts(&drawing);
        assert!(close(texts[0].0, Point::new(1.5, 0.75)));
        assert!(close(texts[1].0, Point::new(0.5, 1.25)));
        assert_eq!(texts[1].1, "∠ 45.00°");
    }

    #[test]
    fn test_aligned_text_follows_slope() {
        let mut drawing = Drawing::new();
        let opts = VectorOptions {
            aligned: true,
            ..VectorOptions::labelled("F")
        };
        // Pointing down-left: atan(dy/dx) folds it back to 45
        draw_vector(&mut drawing, Point::new(2.0, 2.0), Point::new(0.0, 0.0), &opts).unwrap();
        let texts = texts(&drawing);
        assert!((texts[0].2.rotation.0 - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels_are_centered_but_keep_font() {
        let mut drawing = Drawing::new();
        let opts = VectorOptions {
            text: TextStyle {
                size_pt: 14.0,
                h_align: HAlign::Left,
                v_align: VAlign::Top,
                ..TextStyle::default()
            },
            ..VectorOptions::labelled("F")
        };
        draw_vector(&mut drawing, Point::origin(), Point::new(0.0, 2.0), &opts).unwrap();
        let style = texts(&drawing)[0].2;
        assert_eq!(style.h_align, HAlign::Center);
        assert_eq!(style.v_align, VAlign::Center);
        assert_eq!(style.size_pt, 14.0);
    }

    #[test]
    fn test_legend_entry_follows_flag() {
        let mut with_legend = Drawing::new();
        draw_vector(&mut with_legend, Point::origin(), Point::new(1.0, 0.0), &VectorOptions::labelled("F")).unwrap();
        assert_eq!(with_legend.legend().len(), 1);

        let mut without = Drawing::new();
        let opts = VectorOptions {
            show_legend: false,
            ..VectorOptions::labelled("F")
        };
        draw_vector(&mut without, Point::origin(), Point::new(1.0, 0.0), &opts).unwrap();
        assert!(without.legend().is_empty());
    }
}
