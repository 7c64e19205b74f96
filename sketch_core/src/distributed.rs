//! # Distributed Loads
//!
//! A distributed load is a row of arrows pointing onto a span, their lengths
//! following a load profile, capped by an envelope line that carries the
//! label.
//!
//! Arrows hang on the left normal of `from -> to`: for a beam drawn left to
//! right they come down from above.
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::distributed::{draw_distributed_load, DistributedLoadOptions, LoadProfile};
//! use sketch_core::drawing::Drawing;
//! use sketch_core::geometry::Point;
//!
//! let mut drawing = Drawing::new();
//! let triangle = LoadProfile::Linear { start: 0.0, end: 1.5 };
//! let opts = DistributedLoadOptions { arrows: 5, ..DistributedLoadOptions::labelled("q") };
//! draw_distributed_load(&mut drawing, Point::new(0.0, 0.0), Point::new(8.0, 0.0), &opts, |t| triangle.at(t)).unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::errors::{SketchError, SketchResult};
use crate::geometry::Point;
use crate::style::{LineFormat, TextStyle};
use crate::vector::{draw_vector, LabelOffset, VectorOptions};

/// Serializable load shapes, evaluated over `t ∈ [0, 1]` along the span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum LoadProfile {
    /// Constant arrow length
    Uniform { magnitude: f64 },
    /// Linear from `start` to `end` (triangular when one end is zero)
    Linear { start: f64, end: f64 },
    /// Quadratic through `start`, `peak` at mid-span, and `end`
    Parabolic { start: f64, peak: f64, end: f64 },
}

impl LoadProfile {
    /// Arrow length at parameter `t`
    pub fn at(&self, t: f64) -> f64 {
        match *self {
            LoadProfile::Uniform { magnitude } => magnitude,
            LoadProfile::Linear { start, end } => start + (end - start) * t,
            LoadProfile::Parabolic { start, peak, end } => {
                // Lagrange basis on t = 0, 0.5, 1
                start * 2.0 * (t - 0.5) * (t - 1.0) - peak * 4.0 * t * (t - 1.0) + end * 2.0 * t * (t - 0.5)
            }
        }
    }
}

impl Default for LoadProfile {
    fn default() -> Self {
        LoadProfile::Uniform { magnitude: 1.0 }
    }
}

/// Options for [`draw_distributed_load`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributedLoadOptions {
    pub line: LineFormat,
    /// Number of arrows, both span ends included
    pub arrows: usize,
    pub label: String,
    pub show_label: bool,
    pub label_offset: f64,
    pub arrow_scale: f64,
    pub text: TextStyle,
}

impl Default for DistributedLoadOptions {
    fn default() -> Self {
        DistributedLoadOptions {
            line: LineFormat::BLACK,
            arrows: 3,
            label: String::new(),
            show_label: true,
            label_offset: 0.5,
            arrow_scale: 0.15,
            text: TextStyle::centered(),
        }
    }
}

impl DistributedLoadOptions {
    pub fn labelled(label: impl Into<String>) -> Self {
        DistributedLoadOptions {
            label: label.into(),
            ..DistributedLoadOptions::default()
        }
    }
}

/// Draw a distributed load over `from -> to` with arrow lengths from
/// `profile(t)`.
///
/// Fails, drawing nothing, when fewer than two arrows are requested, the span
/// is empty or the profile is not finite at an arrow.
/// Arrows of zero length (e.g. the tip of a triangular load) are skipped.
pub fn draw_distributed_load<F>(
    canvas: &mut impl Canvas,
    from: Point,
    to: Point,
    opts: &DistributedLoadOptions,
    profile: F,
) -> SketchResult<()>
where
    F: Fn(f64) -> f64,
{
    if opts.arrows < 2 {
        return Err(SketchError::invalid_input(
            "arrows",
            opts.arrows.to_string(),
            "A distributed load needs at least two arrows",
        ));
    }
    let span = from.distance_to(to);
    if !span.is_finite() || span == 0.0 {
        return Err(SketchError::invalid_input(
            "span",
            format!("({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y),
            "Distributed load must span a finite, non-zero length",
        ));
    }
    let normal = ((to - from) * (1.0 / span)).perp();

    let last = opts.arrows - 1;
    let lengths: Vec<f64> = (0..opts.arrows).map(|i| profile(i as f64 / last as f64)).collect();
    if let Some(i) = lengths.iter().position(|l| !l.is_finite()) {
        return Err(SketchError::invalid_input(
            "profile",
            format!("{} at t = {}", lengths[i], i as f64 / last as f64),
            "Load profile must be finite along the span",
        ));
    }

    let arrow = VectorOptions::plain(opts.line, opts.arrow_scale);
    for (i, length) in lengths.iter().enumerate() {
        let t = i as f64 / last as f64;
        let p = from.lerp(to, t);
        let tail = p + normal * *length;
        if tail.distance_to(p) == 0.0 {
            tracing::debug!(t, "skipping zero-length load arrow");
            continue;
        }
        draw_vector(canvas, tail, p, &arrow)?;
    }

    let envelope = VectorOptions {
        line: opts.line,
        label: opts.label.clone(),
        show_label: opts.show_label,
        arrow_scale: 0.0,
        offset: LabelOffset::Distance(opts.label_offset),
        text: opts.text,
        ..VectorOptions::default()
    };
    let start = from + normal * lengths[0];
    let end = to + normal * lengths[last];
    if start.distance_to(end) == 0.0 {
        tracing::warn!("distributed load envelope collapsed to a point, label dropped");
        return Ok(());
    }
    draw_vector(canvas, start, end, &envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Drawing, Shape};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    fn polylines(drawing: &Drawing) -> Vec<Vec<Point>> {
        drawing
            .shapes()
            .iter()
            .filter_map(|s| match s {
                Shape::Polyline { points, .. } => Some(points.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_uniform_load_arrows_point_down_onto_span() {
        let mut drawing = Drawing::new();
        draw_distributed_load(
            &mut drawing,
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            &DistributedLoadOptions::labelled("w"),
            |_| 1.0,
        )
        .unwrap();

        let lines = polylines(&drawing);
        // three arrows + envelope
        assert_eq!(lines.len(), 4);
        assert!(close(lines[1][0], Point::new(2.0, 1.0)));
        assert!(close(lines[1][1], Point::new(2.0, 0.0)));
        assert_eq!(lines[3], vec![Point::new(0.0, 1.0), Point::new(4.0, 1.0)]);
    }

    #[test]
    fn test_triangular_load_skips_zero_arrow() {
        let mut drawing = Drawing::new();
        let profile = LoadProfile::Linear { start: 0.0, end: 2.0 };
        let opts = DistributedLoadOptions {
            arrows: 5,
            ..DistributedLoadOptions::default()
        };
        draw_distributed_load(&mut drawing, Point::new(0.0, 0.0), Point::new(8.0, 0.0), &opts, |t| profile.at(t))
            .unwrap();

        let lines = polylines(&drawing);
        assert_eq!(lines.len(), 5);
        // Envelope runs from the span start up to the peak
        let envelope = lines.last().unwrap();
        assert!(close(envelope[0], Point::new(0.0, 0.0)));
        assert!(close(envelope[1], Point::new(8.0, 2.0)));
    }

    #[test]
    fn test_needs_two_arrows() {
        let mut drawing = Drawing::new();
        let opts = DistributedLoadOptions {
            arrows: 1,
            ..DistributedLoadOptions::default()
        };
        let err = draw_distributed_load(&mut drawing, Point::origin(), Point::new(1.0, 0.0), &opts, |_| 1.0)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_profile_draws_nothing() {
        let mut drawing = Drawing::new();
        let opts = DistributedLoadOptions {
            arrows: 4,
            ..DistributedLoadOptions::labelled("q")
        };
        let err = draw_distributed_load(&mut drawing, Point::origin(), Point::new(3.0, 0.0), &opts, |t| {
            if t < 1.0 {
                1.0
            } else {
                f64::NAN
            }
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_collapsed_envelope_draws_nothing() {
        let mut drawing = Drawing::new();
        let result = draw_distributed_load(
            &mut drawing,
            Point::origin(),
            Point::new(2.0, 0.0),
            &DistributedLoadOptions::labelled("q"),
            |_| 0.0,
        );
        assert!(result.is_ok());
        assert!(drawing.is_empty());
        assert!(drawing.legend().is_empty());
    }

    #[test]
    fn test_profile_shapes() {
        let p = LoadProfile::Parabolic { start: 0.0, peak: 1.0, end: 0.0 };
        assert!((p.at(0.5) - 1.0).abs() < 1e-12);
        assert!(p.at(0.0).abs() < 1e-12);
        assert!(p.at(1.0).abs() < 1e-12);
        assert_eq!(LoadProfile::Linear { start: 1.0, end: 3.0 }.at(0.5), 2.0);
        assert_eq!(LoadProfile::default().at(0.7), 1.0);
    }

    #[test]
    fn test_profile_json_is_tagged() {
        let json = serde_json::to_string(&LoadProfile::Uniform { magnitude: 2.0 }).unwrap();
        assert_eq!(json, r#"{"shape":"uniform","magnitude":2.0}"#);
    }
}
