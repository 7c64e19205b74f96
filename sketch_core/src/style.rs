//! # Line and Text Styles
//!
//! Colors, dash patterns, strokes and text styles used by the drawing
//! helpers. Line styles are written as compact format strings: an optional
//! dash code followed or preceded by an optional single-letter color.
//!
//! | Code | Meaning       |
//! |------|---------------|
//! | `-`  | solid         |
//! | `--` | dashed        |
//! | `-.` | dash-dot      |
//! | `:`  | dotted        |
//! | `b g r c m y k w` | blue, green, red, cyan, magenta, yellow, black, white |
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::style::{Color, Dash, LineFormat};
//!
//! let fmt: LineFormat = "r--".parse().unwrap();
//! assert_eq!(fmt.dash, Dash::Dashed);
//! assert_eq!(fmt.color(), Color::RED);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SketchError;
use crate::units::Degrees;

/// Line width of the main strokes (vectors, arcs)
pub const DEFAULT_LINE_WIDTH_PT: f64 = 1.5;

/// Line width of support outlines
pub const SUPPORT_LINE_WIDTH_PT: f64 = 1.0;

/// Line width of hatching, axis and extension lines
pub const THIN_LINE_WIDTH_PT: f64 = 0.5;

/// Default font size
pub const DEFAULT_FONT_SIZE_PT: f64 = 10.0;

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 191, 191);
    pub const MAGENTA: Color = Color::rgb(191, 0, 191);
    pub const YELLOW: Color = Color::rgb(191, 191, 0);

    /// Default line color when a format string names none
    pub const DEFAULT_LINE: Color = Color::rgb(0x1f, 0x77, 0xb4);

    /// Face color of filled beam elements (used with alpha 0.2)
    pub const DEFAULT_FACE: Color = Color::rgb(0x1f, 0x77, 0xb4);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Look up a single-letter color code
    pub fn from_code(code: char) -> Option<Color> {
        match code {
            'b' => Some(Color::BLUE),
            'g' => Some(Color::GREEN),
            'r' => Some(Color::RED),
            'c' => Some(Color::CYAN),
            'm' => Some(Color::MAGENTA),
            'y' => Some(Color::YELLOW),
            'k' => Some(Color::BLACK),
            'w' => Some(Color::WHITE),
            _ => None,
        }
    }

    /// Same color with the given opacity (clamped to 0..=1)
    pub fn with_alpha(self, alpha: f64) -> Self {
        Color {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `#rrggbb`, or `#rrggbbaa` when translucent
    pub fn hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Dash pattern of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dash {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl Dash {
    /// Format-string code for this dash
    pub fn code(&self) -> &'static str {
        match self {
            Dash::Solid => "-",
            Dash::Dashed => "--",
            Dash::DashDot => "-.",
            Dash::Dotted => ":",
        }
    }
}

/// Parsed line format string such as `"k-"` or `"r--"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineFormat {
    pub dash: Dash,
    /// Single-letter color code, `None` for the default line color
    pub color_code: Option<char>,
}

impl LineFormat {
    /// Solid black, the usual format for supports and dimensions
    pub const BLACK: LineFormat = LineFormat {
        dash: Dash::Solid,
        color_code: Some('k'),
    };

    pub fn color(&self) -> Color {
        self.color_code
            .and_then(Color::from_code)
            .unwrap_or(Color::DEFAULT_LINE)
    }

    /// Stroke with this format at the given width
    pub fn stroke(&self, width_pt: f64) -> Stroke {
        Stroke {
            color: self.color(),
            dash: self.dash,
            width_pt,
        }
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        LineFormat {
            dash: Dash::Solid,
            color_code: None,
        }
    }
}

impl FromStr for LineFormat {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| SketchError::invalid_input("line_format", s, reason);

        let mut dash: Option<Dash> = None;
        let mut color_code: Option<char> = None;
        let mut rest = s;

        while let Some(c) = rest.chars().next() {
            let (parsed, len) = if rest.starts_with("--") {
                (Some(Dash::Dashed), 2)
            } else if rest.starts_with("-.") {
                (Some(Dash::DashDot), 2)
            } else if c == '-' {
                (Some(Dash::Solid), 1)
            } else if c == ':' {
                (Some(Dash::Dotted), 1)
            } else if Color::from_code(c).is_some() {
                if color_code.replace(c).is_some() {
                    return Err(invalid("more than one color code"));
                }
                (None, 1)
            } else {
                return Err(invalid(&format!("unsupported format character '{}'", c)));
            };

            if let Some(d) = parsed {
                if dash.replace(d).is_some() {
                    return Err(invalid("more than one line style"));
                }
            }
            rest = &rest[len..];
        }

        Ok(LineFormat {
            dash: dash.unwrap_or_default(),
            color_code,
        })
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color_code {
            Some(c) => write!(f, "{}{}", c, self.dash.code()),
            None => f.write_str(self.dash.code()),
        }
    }
}

impl TryFrom<String> for LineFormat {
    type Error = SketchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LineFormat> for String {
    fn from(value: LineFormat) -> Self {
        value.to_string()
    }
}

/// A resolved stroke: color, dash and width in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub dash: Dash,
    pub width_pt: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        LineFormat::default().stroke(DEFAULT_LINE_WIDTH_PT)
    }
}

/// Horizontal text alignment relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    #[default]
    Baseline,
    Center,
    Top,
    Bottom,
}

/// How a piece of text is placed and painted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size_pt: f64,
    pub color: Color,
    pub h_align: HAlign,
    pub v_align: VAlign,
    /// Counter-clockwise rotation about the anchor
    pub rotation: Degrees,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            size_pt: DEFAULT_FONT_SIZE_PT,
            color: Color::BLACK,
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
            rotation: Degrees::ZERO,
        }
    }
}

impl TextStyle {
    /// Centered both ways, as used for vector labels
    pub fn centered() -> Self {
        TextStyle {
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            ..TextStyle::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Degrees) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_size(mut self, size_pt: f64) -> Self {
        self.size_pt = size_pt;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
