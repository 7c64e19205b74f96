//! # Support Symbols
//!
//! Glyphs for structural boundary conditions: pinned (triangle on hatched
//! ground), roller (triangle on three wheels), fixed (hatched wall) and free
//! end (label only).
//!
//! Symbols are defined in unit coordinates with the supported point at the
//! origin and the ground below it. They are scaled, rotated (clockwise for
//! positive angles) and moved onto the anchor. Labels are scaled and moved
//! but never rotated, so they stay readable.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::geometry::{linspace, rotate, scale, translate, zip_points, Point};
use crate::style::{LineFormat, TextStyle, SUPPORT_LINE_WIDTH_PT, THIN_LINE_WIDTH_PT};
use crate::units::Degrees;

/// Support triangle, apex at the supported point
const TRIANGLE_X: [f64; 4] = [0.0, -0.35, 0.35, 0.0];
const TRIANGLE_Y: [f64; 4] = [0.0, -0.6, -0.6, 0.0];

/// Ground hatching: five strokes running down-left from the ground line
const HATCH_X: [f64; 15] = [
    -0.35, -0.5, -0.35, -0.175, -0.325, -0.175, 0.0, -0.15, 0.0, 0.175, 0.025, 0.175, 0.35, 0.2, 0.35,
];
const PINNED_HATCH_Y: [f64; 15] = [
    -0.6, -0.75, -0.6, -0.6, -0.75, -0.6, -0.6, -0.75, -0.6, -0.6, -0.75, -0.6, -0.6, -0.75, -0.6,
];
const ROLLER_HATCH_Y: [f64; 15] = [
    -0.75, -0.9, -0.75, -0.75, -0.9, -0.75, -0.75, -0.9, -0.75, -0.75, -0.9, -0.75, -0.75, -0.9, -0.75,
];

/// Roller wheels
const WHEEL_RADIUS: f64 = 0.072;
const WHEEL_SAMPLES: usize = 18;
const WHEEL_CENTERS: [(f64, f64); 3] = [(-0.25, -0.675), (0.0, -0.675), (0.25, -0.675)];

/// Fixed support: wall line and hatching to its left
const WALL_X: [f64; 2] = [0.0, 0.0];
const WALL_Y: [f64; 2] = [-0.35, 0.35];
const WALL_HATCH_X: [f64; 15] = [
    0.0, -0.15, 0.0, 0.0, -0.15, 0.0, 0.0, -0.15, 0.0, 0.0, -0.15, 0.0, 0.0, -0.15, 0.0,
];
const WALL_HATCH_Y: [f64; 15] = [
    -0.35, -0.5, -0.35, -0.175, -0.325, -0.175, 0.0, -0.15, 0.0, 0.175, 0.025, 0.175, 0.35, 0.2, 0.35,
];

/// Boundary condition drawn by [`draw_support`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportKind {
    /// Free end - no symbol, label only
    Free,

    /// Pinned/hinged support - triangle on hatched ground
    #[default]
    Pinned,

    /// Roller support - triangle on wheels
    Roller,

    /// Fixed support - hatched wall
    Fixed,
}

impl SupportKind {
    /// All support kinds
    pub const ALL: [SupportKind; 4] = [
        SupportKind::Pinned,
        SupportKind::Roller,
        SupportKind::Fixed,
        SupportKind::Free,
    ];

    /// Returns true if this support restrains vertical displacement
    pub fn restrains_vertical(&self) -> bool {
        matches!(self, SupportKind::Pinned | SupportKind::Roller | SupportKind::Fixed)
    }

    /// Returns true if this support restrains rotation
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Free => "Free",
            SupportKind::Pinned => "Pinned",
            SupportKind::Roller => "Roller",
            SupportKind::Fixed => "Fixed",
        }
    }

    /// Label anchor in unit coordinates for each side
    fn label_position(&self, side: LabelSide) -> Option<(f64, f64)> {
        match (self, side) {
            (_, LabelSide::Hidden) => None,
            (SupportKind::Pinned | SupportKind::Roller, LabelSide::Right) => Some((0.4, -0.8)),
            (SupportKind::Pinned | SupportKind::Roller, LabelSide::Left) => Some((-0.45, -0.8)),
            (SupportKind::Fixed, LabelSide::Right) => Some((0.05, -0.8)),
            (SupportKind::Fixed, LabelSide::Left) => Some((-0.4, -0.6)),
            (SupportKind::Free, LabelSide::Right) => Some((0.05, -0.6)),
            (SupportKind::Free, LabelSide::Left) => Some((-0.10, -0.6)),
        }
    }
}

/// Which side of the symbol the label goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelSide {
    #[default]
    Hidden,
    Right,
    Left,
}

/// Options for [`draw_support`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportOptions {
    pub scale: f64,
    pub label: String,
    pub label_side: LabelSide,
    /// Clockwise rotation of the symbol (not the label)
    pub rotation: Degrees,
    pub line: LineFormat,
    pub text: TextStyle,
}

impl Default for SupportOptions {
    fn default() -> Self {
        SupportOptions {
            scale: 1.0,
            label: String::new(),
            label_side: LabelSide::Hidden,
            rotation: Degrees::ZERO,
            line: LineFormat::BLACK,
            text: TextStyle::default(),
        }
    }
}

impl SupportOptions {
    /// Default options with a label on the right
    pub fn labelled(label: impl Into<String>) -> Self {
        SupportOptions {
            label: label.into(),
            label_side: LabelSide::Right,
            ..SupportOptions::default()
        }
    }
}

/// Unit-coordinate polylines for a symbol, paired with their line widths
fn symbol_parts(kind: SupportKind) -> Vec<(Vec<Point>, f64)> {
    match kind {
        SupportKind::Free => Vec::new(),
        SupportKind::Pinned => vec![
            (zip_points(&TRIANGLE_X, &TRIANGLE_Y), SUPPORT_LINE_WIDTH_PT),
            (zip_points(&HATCH_X, &PINNED_HATCH_Y), THIN_LINE_WIDTH_PT),
        ],
        SupportKind::Roller => {
            let mut parts = vec![
                (zip_points(&TRIANGLE_X, &TRIANGLE_Y), SUPPORT_LINE_WIDTH_PT),
                (zip_points(&HATCH_X, &ROLLER_HATCH_Y), THIN_LINE_WIDTH_PT),
            ];
            let turn = linspace(0.0, 2.0 * std::f64::consts::PI, WHEEL_SAMPLES);
            for (cx, cy) in WHEEL_CENTERS {
                let wheel = turn
                    .iter()
                    .map(|a| Point::new(cx + WHEEL_RADIUS * a.cos(), cy + WHEEL_RADIUS * a.sin()))
                    .collect();
                parts.push((wheel, THIN_LINE_WIDTH_PT));
            }
            parts
        }
        SupportKind::Fixed => vec![
            (zip_points(&WALL_X, &WALL_Y), SUPPORT_LINE_WIDTH_PT),
            (zip_points(&WALL_HATCH_X, &WALL_HATCH_Y), THIN_LINE_WIDTH_PT),
        ],
    }
}

/// Draw a support symbol of `kind` at `at`.
pub fn draw_support(canvas: &mut impl Canvas, kind: SupportKind, at: Point, opts: &SupportOptions) {
    for (part, width_pt) in symbol_parts(kind) {
        let placed = translate(&rotate(&scale(&part, opts.scale), opts.rotation), at);
        canvas.polyline(&placed, &opts.line.stroke(width_pt));
    }

    if let Some((lx, ly)) = kind.label_position(opts.label_side) {
        let anchor = at.offset(lx * opts.scale, ly * opts.scale);
        canvas.text(anchor, &opts.label, &opts.text);
    }
}

pub fn draw_pinned(canvas: &mut impl Canvas, at: Point, opts: &SupportOptions) {
    draw_support(canvas, SupportKind::Pinned, at, opts)
}

pub fn draw_roller(canvas: &mut impl Canvas, at: Point, opts: &SupportOptions) {
    draw_support(canvas, SupportKind::Roller, at, opts)
}

pub fn draw_fixed(canvas: &mut impl Canvas, at: Point, opts: &SupportOptions) {
    draw_support(canvas, SupportKind::Fixed, at, opts)
}

/// Beam end without support; only places the label
pub fn draw_free_end(canvas: &mut impl Canvas, at: Point, opts: &SupportOptions) {
    draw_support(canvas, SupportKind::Free, at, opts)
}
