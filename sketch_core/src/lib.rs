//! # sketch_core - Beam Diagram Drawing Helpers
//!
//! `sketch_core` draws the symbols of structural free-body diagrams: force
//! vectors, supports, axis markers, beam elements, dimensions, distributed
//! loads and moment pairs. Helpers compute geometry in drawing units and paint
//! it onto any [`Canvas`]; a recorded [`Drawing`] can then be exported to PDF,
//! SVG or PNG.
//!
//! ## Design Philosophy
//!
//! - **Backend-free geometry**: helpers only talk to the [`Canvas`] trait
//! - **JSON-First**: options, sheets and drawings implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use sketch_core::prelude::*;
//!
//! let mut drawing = Drawing::new();
//! draw_element(&mut drawing, 0.0, 6.0, 0.0, 0.3, &ElementOptions::default());
//! draw_pinned(&mut drawing, Point::new(0.0, 0.0), &SupportOptions::labelled("A"));
//! draw_roller(&mut drawing, Point::new(6.0, 0.0), &SupportOptions::labelled("B"));
//! draw_vector(&mut drawing, Point::new(3.0, 2.0), Point::new(3.0, 0.3), &VectorOptions::labelled("P")).unwrap();
//!
//! let typst_source = sketch_core::export::to_typst(&drawing, &ExportSettings::default()).unwrap();
//! assert!(typst_source.contains("curve("));
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Points, rotation, bounds and viewports
//! - [`style`] - Line formats, colors and text styles
//! - [`canvas`] / [`drawing`] - Drawing surface trait and the recording canvas
//! - [`vector`], [`supports`], [`axis`], [`element`], [`dimension`],
//!   [`distributed`], [`moment`] - The drawing helpers
//! - [`sheet`] - Declarative figure documents
//! - [`export`] - PDF/SVG/PNG export through Typst
//! - [`errors`] - Structured error types

pub mod axis;
pub mod canvas;
#[cfg(feature = "iced")]
pub mod canvas_iced;
pub mod dimension;
pub mod distributed;
pub mod drawing;
pub mod element;
pub mod errors;
pub mod export;
pub mod geometry;
pub mod moment;
pub mod sheet;
pub mod style;
pub mod supports;
pub mod units;
pub mod vector;

// Re-export commonly used types at crate root for convenience
pub use canvas::Canvas;
pub use drawing::Drawing;
pub use errors::{SketchError, SketchResult};
pub use export::{save, ExportSettings, ImageFormat};
pub use sheet::{Element, Sheet};

/// Everything needed to build a figure by hand
pub mod prelude {
    pub use crate::axis::{draw_axis, AxisOptions};
    pub use crate::canvas::Canvas;
    pub use crate::dimension::{draw_dimension, DimensionOptions};
    pub use crate::distributed::{draw_distributed_load, DistributedLoadOptions, LoadProfile};
    pub use crate::drawing::Drawing;
    pub use crate::element::{draw_element, ElementOptions};
    pub use crate::errors::{SketchError, SketchResult};
    pub use crate::export::{save, ExportSettings};
    pub use crate::geometry::Point;
    pub use crate::moment::{draw_moment, MomentOptions};
    pub use crate::sheet::{Element, Sheet};
    pub use crate::style::{Color, Dash, LineFormat, TextStyle};
    pub use crate::supports::{
        draw_fixed, draw_free_end, draw_pinned, draw_roller, draw_support, LabelSide, SupportKind, SupportOptions,
    };
    pub use crate::units::Degrees;
    pub use crate::vector::{draw_vector, LabelOffset, VectorOptions};
}
