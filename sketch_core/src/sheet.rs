//! # Sheet Documents
//!
//! A `Sheet` describes one complete figure as data: metadata, export
//! settings and an ordered list of drawing elements. Sheets are plain JSON,
//! so figures can be produced by other tools and piped into the CLI.
//!
//! ## Structure
//!
//! ```text
//! Sheet
//! ├── meta: SheetMetadata (version, title, author, timestamps)
//! ├── settings: ExportSettings (scale, margin, dpi, legend)
//! └── items: Vec<SheetItem> (elements in paint order, each with a UUID)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::geometry::Point;
//! use sketch_core::sheet::{Element, Sheet};
//! use sketch_core::supports::{SupportKind, SupportOptions};
//!
//! let mut sheet = Sheet::new("Simply supported beam", "Jane Engineer");
//! sheet.add(Element::Support {
//!     kind: SupportKind::Pinned,
//!     at: Point::new(0.0, 0.0),
//!     options: SupportOptions::labelled("A"),
//! });
//!
//! let drawing = sheet.render().unwrap();
//! assert!(!drawing.is_empty());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::axis::{draw_axis, AxisOptions};
use crate::canvas::Canvas;
use crate::dimension::{draw_dimension, DimensionOptions};
use crate::distributed::{draw_distributed_load, DistributedLoadOptions, LoadProfile};
use crate::drawing::Drawing;
use crate::element::{draw_element, ElementOptions};
use crate::errors::{SketchError, SketchResult};
use crate::export::ExportSettings;
use crate::geometry::Point;
use crate::moment::{draw_moment, MomentOptions};
use crate::supports::{draw_support, SupportKind, SupportOptions};
use crate::units::Degrees;
use crate::vector::{draw_vector, VectorOptions};

/// Current schema version for sheet JSON
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One drawable element of a sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Vector {
        from: Point,
        to: Point,
        #[serde(default)]
        options: VectorOptions,
    },
    Support {
        kind: SupportKind,
        at: Point,
        #[serde(default)]
        options: SupportOptions,
    },
    Axis {
        origin: Point,
        #[serde(default)]
        options: AxisOptions,
    },
    /// Beam element spanning `x1..x2`, `y1..y2`
    Beam {
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
        #[serde(default)]
        options: ElementOptions,
    },
    Dimension {
        from: Point,
        to: Point,
        #[serde(default)]
        options: DimensionOptions,
    },
    DistributedLoad {
        from: Point,
        to: Point,
        #[serde(default)]
        profile: LoadProfile,
        #[serde(default)]
        options: DistributedLoadOptions,
    },
    Moment {
        center: Point,
        radius: f64,
        start: Degrees,
        end: Degrees,
        #[serde(default)]
        options: MomentOptions,
    },
}

impl Element {
    /// Short name of the element type, for logs and listings
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Vector { .. } => "vector",
            Element::Support { .. } => "support",
            Element::Axis { .. } => "axis",
            Element::Beam { .. } => "beam",
            Element::Dimension { .. } => "dimension",
            Element::DistributedLoad { .. } => "distributed_load",
            Element::Moment { .. } => "moment",
        }
    }

    /// Draw this element onto `canvas`
    pub fn draw(&self, canvas: &mut impl Canvas) -> SketchResult<()> {
        match self {
            Element::Vector { from, to, options } => draw_vector(canvas, *from, *to, options),
            Element::Support { kind, at, options } => {
                draw_support(canvas, *kind, *at, options);
                Ok(())
            }
            Element::Axis { origin, options } => {
                draw_axis(canvas, *origin, options);
                Ok(())
            }
            Element::Beam { x1, x2, y1, y2, options } => {
                draw_element(canvas, *x1, *x2, *y1, *y2, options);
                Ok(())
            }
            Element::Dimension { from, to, options } => draw_dimension(canvas, *from, *to, options),
            Element::DistributedLoad { from, to, profile, options } => {
                draw_distributed_load(canvas, *from, *to, options, |t| profile.at(t))
            }
            Element::Moment { center, radius, start, end, options } => {
                draw_moment(canvas, *center, *radius, *start, *end, options)
            }
        }
    }
}

/// An element with its stable identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetItem {
    pub id: Uuid,
    pub element: Element,
}

/// Sheet metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub title: String,

    pub author: String,

    /// When the sheet was created
    pub created: DateTime<Utc>,

    /// When the sheet was last modified
    pub modified: DateTime<Utc>,
}

/// Root figure container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub meta: SheetMetadata,

    #[serde(default)]
    pub settings: ExportSettings,

    /// Elements in paint order
    #[serde(default)]
    pub items: Vec<SheetItem>,
}

impl Sheet {
    /// Create a new empty sheet.
    ///
    /// ```rust
    /// use sketch_core::sheet::Sheet;
    ///
    /// let sheet = Sheet::new("Cantilever", "John Doe");
    /// assert_eq!(sheet.meta.title, "Cantilever");
    /// assert_eq!(sheet.item_count(), 0);
    /// ```
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Sheet {
            meta: SheetMetadata {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                author: author.into(),
                created: now,
                modified: now,
            },
            settings: ExportSettings::default(),
            items: Vec::new(),
        }
    }

    /// Append an element; returns its UUID.
    pub fn add(&mut self, element: Element) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(SheetItem { id, element });
        self.touch();
        id
    }

    /// Builder-style [`Sheet::add`]
    pub fn with(mut self, element: Element) -> Self {
        self.add(element);
        self
    }

    /// Remove an element by UUID, returning it if it existed.
    pub fn remove(&mut self, id: &Uuid) -> Option<Element> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        let item = self.items.remove(index);
        self.touch();
        Some(item.element)
    }

    pub fn get(&self, id: &Uuid) -> Option<&Element> {
        self.items.iter().find(|item| &item.id == id).map(|item| &item.element)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Draw every element, in order, onto `canvas`. Stops at the first
    /// element that cannot be drawn.
    pub fn draw(&self, canvas: &mut impl Canvas) -> SketchResult<()> {
        for item in &self.items {
            item.element.draw(canvas).map_err(|e| {
                tracing::warn!(id = %item.id, kind = item.element.kind_name(), error = %e, "element failed to draw");
                e
            })?;
        }
        Ok(())
    }

    /// Record the whole sheet into a [`Drawing`].
    pub fn render(&self) -> SketchResult<Drawing> {
        let mut drawing = Drawing::new();
        self.draw(&mut drawing)?;
        tracing::debug!(items = self.item_count(), shapes = drawing.len(), "sheet rendered");
        Ok(drawing)
    }

    /// Parse a sheet from JSON and check its schema version.
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let sheet: Sheet = serde_json::from_str(json).map_err(|e| SketchError::SerializationError {
            reason: format!("Invalid sheet JSON: {}", e),
        })?;
        validate_version(&sheet.meta.version)?;
        Ok(sheet)
    }

    pub fn to_json(&self) -> SketchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Sheet::new("", "")
    }
}

/// Validate that a sheet version is compatible with the current schema.
pub fn validate_version(file_version: &str) -> SketchResult<()> {
    let mismatch = || SketchError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Sheet {
        Sheet::new("Test beam", "Test Engineer")
            .with(Element::Beam {
                x1: 0.0,
                x2: 6.0,
                y1: 0.0,
                y2: 0.3,
                options: ElementOptions::default(),
            })
            .with(Element::Support {
                kind: SupportKind::Pinned,
                at: Point::new(0.0, 0.0),
                options: SupportOptions::labelled("A"),
            })
            .with(Element::Support {
                kind: SupportKind::Roller,
                at: Point::new(6.0, 0.0),
                options: SupportOptions::labelled("B"),
            })
            .with(Element::DistributedLoad {
                from: Point::new(0.0, 0.3),
                to: Point::new(6.0, 0.3),
                profile: LoadProfile::Uniform { magnitude: 1.0 },
                options: DistributedLoadOptions::labelled("w"),
            })
    }

    #[test]
    fn test_sheet_creation() {
        let sheet = Sheet::new("Title", "Author");
        assert_eq!(sheet.meta.version, SCHEMA_VERSION);
        assert_eq!(sheet.meta.author, "Author");
        assert_eq!(sheet.item_count(), 0);
    }

    #[test]
    fn test_add_remove_item() {
        let mut sheet = Sheet::new("Title", "Author");
        let id = sheet.add(Element::Axis {
            origin: Point::origin(),
            options: AxisOptions::default(),
        });
        assert_eq!(sheet.item_count(), 1);
        assert_eq!(sheet.get(&id).map(Element::kind_name), Some("axis"));

        assert!(sheet.remove(&id).is_some());
        assert!(sheet.remove(&id).is_none());
        assert_eq!(sheet.item_count(), 0);
    }

    #[test]
    fn test_render_keeps_paint_order() {
        let drawing = sample_sheet().render().unwrap();
        assert!(matches!(drawing.shapes()[0], crate::drawing::Shape::Polygon { .. }));
        let bounds = drawing.bounds().unwrap();
        assert!(bounds.max.y > 1.0);
        assert!(bounds.min.y < -0.5);
    }

    #[test]
    fn test_render_reports_bad_element() {
        let sheet = Sheet::new("Bad", "Author").with(Element::Vector {
            from: Point::origin(),
            to: Point::origin(),
            options: VectorOptions::default(),
        });
        let err = sheet.render().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_roundtrip() {
        let sheet = sample_sheet();
        let json = sheet.to_json().unwrap();
        assert!(json.contains("\"type\": \"distributed_load\""));
        assert!(json.contains("\"line\": \"k-\""));

        let back = Sheet::from_json(&json).unwrap();
        assert_eq!(back.items, sheet.items);
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let json = r#"{
            "meta": {
                "version": "0.1.0",
                "title": "Minimal",
                "author": "",
                "created": "2025-01-01T00:00:00Z",
                "modified": "2025-01-01T00:00:00Z"
            },
            "items": [
                {
                    "id": "00000000-0000-0000-0000-000000000001",
                    "element": { "type": "vector", "from": {"x": 0, "y": 0}, "to": {"x": 1, "y": 1},
                                 "options": { "label": "F", "offset": [0.2, 0.0] } }
                }
            ]
        }"#;
        let sheet = Sheet::from_json(json).unwrap();
        match &sheet.items[0].element {
            Element::Vector { options, .. } => {
                assert_eq!(options.label, "F");
                assert_eq!(options.arrow_scale, 0.02);
                assert_eq!(options.offset, crate::vector::LabelOffset::Direction(0.2, 0.0));
            }
            other => panic!("expected vector, got {:?}", other),
        }
        assert_eq!(sheet.settings, ExportSettings::default());
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_from_json_rejects_newer_schema() {
        let mut sheet = sample_sheet();
        sheet.meta.version = "0.9.0".to_string();
        let json = serde_json::to_string(&sheet).unwrap();
        let err = Sheet::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }
}
