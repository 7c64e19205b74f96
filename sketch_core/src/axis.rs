//! Axis marker: a small x/y cross with optional axis names.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::style::{LineFormat, TextStyle, THIN_LINE_WIDTH_PT};

/// Options for [`draw_axis`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    /// Half-length of each axis line
    pub scale: f64,
    pub show_labels: bool,
    pub line: LineFormat,
    pub text: TextStyle,
}

impl Default for AxisOptions {
    fn default() -> Self {
        AxisOptions {
            scale: 1.0,
            show_labels: true,
            line: LineFormat::BLACK,
            text: TextStyle::default(),
        }
    }
}

/// Draw x and y axis lines crossing at `origin`.
pub fn draw_axis(canvas: &mut impl Canvas, origin: Point, opts: &AxisOptions) {
    let s = opts.scale;
    let stroke = opts.line.stroke(THIN_LINE_WIDTH_PT);
    canvas.polyline(&[origin.offset(-s, 0.0), origin.offset(s, 0.0)], &stroke);
    canvas.polyline(&[origin.offset(0.0, -s), origin.offset(0.0, s)], &stroke);

    if opts.show_labels {
        canvas.text(origin.offset(1.1 * s, -0.25 * s), "x", &opts.text);
        canvas.text(origin.offset(-0.25 * s, 1.1 * s), "y", &opts.text);
    }
}
