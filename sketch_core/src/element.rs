//! Beam element: an outlined, lightly filled rectangle.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::style::{Color, LineFormat, DEFAULT_LINE_WIDTH_PT};

/// Opacity of the element fill
pub const ELEMENT_FILL_ALPHA: f64 = 0.2;

/// Options for [`draw_element`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementOptions {
    pub line: LineFormat,
    pub fill: bool,
    pub fill_color: Color,
}

impl Default for ElementOptions {
    fn default() -> Self {
        ElementOptions {
            line: LineFormat::BLACK,
            fill: true,
            fill_color: Color::DEFAULT_FACE,
        }
    }
}

/// Outline of the rectangle spanned by `x1..x2` and `y1..y2`, closed.
pub fn element_outline(x1: f64, x2: f64, y1: f64, y2: f64) -> [Point; 5] {
    [
        Point::new(x1, y1),
        Point::new(x1, y2),
        Point::new(x2, y2),
        Point::new(x2, y1),
        Point::new(x1, y1),
    ]
}

/// Draw a beam element between `x1..x2` and `y1..y2`.
pub fn draw_element(canvas: &mut impl Canvas, x1: f64, x2: f64, y1: f64, y2: f64, opts: &ElementOptions) {
    let outline = element_outline(x1, x2, y1, y2);
    if opts.fill {
        canvas.fill_polygon(&outline, opts.fill_color.with_alpha(ELEMENT_FILL_ALPHA));
    }
    canvas.polyline(&outline, &opts.line.stroke(DEFAULT_LINE_WIDTH_PT));
}
