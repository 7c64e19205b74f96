//! # Moment Pairs
//!
//! A couple is drawn as an arc around its point of application with an
//! arrowhead at the end of the sweep and a small axis cross at the center.
//! Sweeping from a smaller to a larger angle gives a counter-clockwise
//! moment.

use serde::{Deserialize, Serialize};

use crate::axis::{draw_axis, AxisOptions};
use crate::canvas::Canvas;
use crate::errors::{SketchError, SketchResult};
use crate::geometry::{arc, Point};
use crate::style::{LineFormat, TextStyle, DEFAULT_LINE_WIDTH_PT};
use crate::units::Degrees;
use crate::vector::{draw_vector, LabelOffset, VectorOptions};

/// Samples along the arc
pub const ARC_SAMPLES: usize = 50;

/// The arrowhead spans the last `ARROW_SPAN` arc segments
const ARROW_SPAN: usize = 9;

/// Options for [`draw_moment`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentOptions {
    pub line: LineFormat,
    pub label: String,
    pub show_label: bool,
    pub label_offset: f64,
    /// Arrowhead size relative to the chord it sits on
    pub arrow_scale: f64,
    pub text: TextStyle,
}

impl Default for MomentOptions {
    fn default() -> Self {
        MomentOptions {
            line: LineFormat::BLACK,
            label: String::new(),
            show_label: true,
            label_offset: 0.5,
            arrow_scale: 0.6,
            text: TextStyle::centered(),
        }
    }
}

impl MomentOptions {
    pub fn labelled(label: impl Into<String>) -> Self {
        MomentOptions {
            label: label.into(),
            ..MomentOptions::default()
        }
    }
}

/// Draw a moment pair at `center`, sweeping `start -> end` at `radius`.
pub fn draw_moment(
    canvas: &mut impl Canvas,
    center: Point,
    radius: f64,
    start: Degrees,
    end: Degrees,
    opts: &MomentOptions,
) -> SketchResult<()> {
    if !center.is_finite() {
        return Err(SketchError::invalid_input(
            "center",
            format!("({}, {})", center.x, center.y),
            "Moment center must be finite",
        ));
    }
    if !start.0.is_finite() || !end.0.is_finite() {
        return Err(SketchError::invalid_input(
            "angles",
            format!("{} -> {}", start.0, end.0),
            "Moment angles must be finite",
        ));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SketchError::invalid_input(
            "radius",
            radius.to_string(),
            "Moment radius must be positive",
        ));
    }
    if start == end {
        return Err(SketchError::invalid_input(
            "end_angle",
            end.0.to_string(),
            "Moment arc must sweep a non-zero angle",
        ));
    }

    let points = arc(center, radius, start, end, ARC_SAMPLES);
    let tip = points[ARC_SAMPLES - 1];
    let tail = points[ARC_SAMPLES - 1 - ARROW_SPAN];
    if tail.distance_to(tip) == 0.0 {
        return Err(SketchError::invalid_input(
            "end_angle",
            end.0.to_string(),
            "Moment arc is too short for an arrowhead",
        ));
    }
    canvas.polyline(&points, &opts.line.stroke(DEFAULT_LINE_WIDTH_PT));
    let head = VectorOptions {
        line: opts.line,
        label: opts.label.clone(),
        show_label: opts.show_label,
        arrow_scale: opts.arrow_scale,
        offset: LabelOffset::Distance(opts.label_offset),
        text: opts.text,
        ..VectorOptions::default()
    };
    draw_vector(canvas, tail, tip, &head)?;

    let cross = AxisOptions {
        scale: radius / 4.0,
        show_labels: false,
        line: opts.line,
        ..AxisOptions::default()
    };
    draw_axis(canvas, center, &cross);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Drawing, Shape};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_moment_parts() {
        let mut drawing = Drawing::new();
        draw_moment(
            &mut drawing,
            Point::new(1.0, 1.0),
            1.0,
            Degrees(0.0),
            Degrees(270.0),
            &MomentOptions::labelled("M"),
        )
        .unwrap();

        let shapes = drawing.shapes();
        // arc, arrowhead, label, two cross lines
        assert_eq!(shapes.len(), 5);
        match &shapes[0] {
            Shape::Polyline { points, .. } => {
                assert_eq!(points.len(), ARC_SAMPLES);
                assert!(close(points[0], Point::new(2.0, 1.0)));
                assert!(close(points[49], Point::new(1.0, 0.0)));
            }
            other => panic!("expected arc, got {:?}", other),
        }
        match &shapes[1] {
            Shape::Polyline { points, .. } => {
                assert_eq!(points.len(), 5);
                assert!(close(points[1], Point::new(1.0, 0.0)));
            }
            other => panic!("expected arrowhead, got {:?}", other),
        }
        match &shapes[3] {
            Shape::Polyline { points, .. } => {
                assert!(close(points[0], Point::new(0.75, 1.0)));
                assert!(close(points[1], Point::new(1.25, 1.0)));
            }
            other => panic!("expected axis line, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_degenerate_moments() {
        let mut drawing = Drawing::new();
        let opts = MomentOptions::default();
        assert!(draw_moment(&mut drawing, Point::origin(), 0.0, Degrees(0.0), Degrees(90.0), &opts).is_err());
        assert!(draw_moment(&mut drawing, Point::origin(), 1.0, Degrees(30.0), Degrees(30.0), &opts).is_err());
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_non_finite_input_draws_nothing() {
        let opts = MomentOptions::labelled("M");
        let cases = [
            (Point::origin(), Degrees(f64::NAN), Degrees(90.0)),
            (Point::origin(), Degrees(0.0), Degrees(f64::INFINITY)),
            (Point::new(f64::NAN, 0.0), Degrees(0.0), Degrees(90.0)),
        ];
        for (center, start, end) in cases {
            let mut drawing = Drawing::new();
            let err = draw_moment(&mut drawing, center, 1.0, start, end, &opts).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
            assert!(drawing.is_empty(), "partial moment left for {:?} -> {:?}", start, end);
        }
    }
}
