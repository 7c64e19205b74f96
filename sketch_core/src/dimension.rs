//! # Length Dimensions
//!
//! An aligned dimension line: two opposing arrows drawn parallel to the
//! measured segment, plus extension lines back to the measured points.
//!
//! `offset` is the distance of the dimension line from the segment, measured
//! along the segment's left normal; the default `-1` puts it on the right
//! (below a left-to-right beam).

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::errors::{SketchError, SketchResult};
use crate::geometry::Point;
use crate::style::{LineFormat, TextStyle, THIN_LINE_WIDTH_PT};
use crate::vector::{draw_vector, LabelOffset, VectorOptions};

/// Extension lines overshoot the dimension line by this factor
const EXTENSION_OVERSHOOT: f64 = 1.2;

/// Options for [`draw_dimension`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionOptions {
    pub line: LineFormat,
    pub offset: f64,
    pub label: String,
    pub show_label: bool,
    pub label_offset: f64,
    pub arrow_scale: f64,
    pub text: TextStyle,
}

impl Default for DimensionOptions {
    fn default() -> Self {
        DimensionOptions {
            line: LineFormat::BLACK,
            offset: -1.0,
            label: String::new(),
            show_label: true,
            label_offset: 0.5,
            arrow_scale: 0.015,
            text: TextStyle::centered(),
        }
    }
}

impl DimensionOptions {
    pub fn labelled(label: impl Into<String>) -> Self {
        DimensionOptions {
            label: label.into(),
            ..DimensionOptions::default()
        }
    }
}

/// Draw an aligned dimension measuring `from -> to`.
pub fn draw_dimension(canvas: &mut impl Canvas, from: Point, to: Point, opts: &DimensionOptions) -> SketchResult<()> {
    let length = from.distance_to(to);
    if !length.is_finite() || length == 0.0 {
        return Err(SketchError::invalid_input(
            "dimension",
            format!("({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y),
            "Dimension must span a finite, non-zero length",
        ));
    }
    let shift = ((to - from) * (opts.offset / length)).perp();

    let labelled = VectorOptions {
        line: opts.line,
        label: opts.label.clone(),
        show_label: opts.show_label,
        show_legend: false,
        arrow_scale: opts.arrow_scale,
        offset: LabelOffset::Distance(opts.label_offset),
        text: opts.text,
        ..VectorOptions::default()
    };
    draw_vector(canvas, from + shift, to + shift, &labelled)?;
    draw_vector(canvas, to + shift, from + shift, &VectorOptions::plain(opts.line, opts.arrow_scale))?;

    let thin = opts.line.stroke(THIN_LINE_WIDTH_PT);
    canvas.polyline(&[from, from + shift * EXTENSION_OVERSHOOT], &thin);
    canvas.polyline(&[to, to + shift * EXTENSION_OVERSHOOT], &thin);
    Ok(())
}
