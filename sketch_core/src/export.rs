//! # Image Export
//!
//! Turns a recorded [`Drawing`] into PDF, SVG or PNG bytes using Typst.
//!
//! ## Architecture
//!
//! - The drawing is translated into a standalone Typst page whose size
//!   follows the drawing bounds (`width: auto, height: auto`)
//! - Drawing units map to points through `unit_pt`, with equal aspect and
//!   the y axis flipped; no axes are drawn
//! - The page is compiled in-memory and handed to `typst-pdf`, `typst-svg`
//!   or `typst-render`
//!
//! ## Example
//!
//! ```rust,no_run
//! use sketch_core::drawing::Drawing;
//! use sketch_core::export::{save, ExportSettings};
//! use sketch_core::geometry::Point;
//! use sketch_core::supports::{draw_pinned, SupportOptions};
//!
//! let mut drawing = Drawing::new();
//! draw_pinned(&mut drawing, Point::origin(), &SupportOptions::labelled("A"));
//! save(&drawing, "support.pdf", &ExportSettings::default()).unwrap();
//! ```

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::drawing::{Drawing, Shape};
use crate::errors::{SketchError, SketchResult};
use crate::geometry::{Bounds, Point, Viewport};
use crate::style::{Color, Dash, HAlign, Stroke, TextStyle, VAlign};

// ============================================================================
// Settings
// ============================================================================

/// Page and raster settings for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Points per drawing unit
    pub unit_pt: f64,

    /// Free space around the drawing
    pub margin_pt: f64,

    /// Raster resolution for PNG output
    pub dpi: f64,

    /// Add a legend block when the drawing registered legend entries
    pub show_legend: bool,

    /// Page color, `None` for a transparent page
    pub background: Option<Color>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            unit_pt: 40.0,
            margin_pt: 12.0,
            dpi: 90.0,
            show_legend: false,
            background: Some(Color::WHITE),
        }
    }
}

impl ExportSettings {
    pub fn validate(&self) -> SketchResult<()> {
        if !self.unit_pt.is_finite() || self.unit_pt <= 0.0 {
            return Err(SketchError::invalid_input(
                "unit_pt",
                self.unit_pt.to_string(),
                "Scale must be a positive number of points per unit",
            ));
        }
        if !self.margin_pt.is_finite() || self.margin_pt < 0.0 {
            return Err(SketchError::invalid_input(
                "margin_pt",
                self.margin_pt.to_string(),
                "Margin cannot be negative",
            ));
        }
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(SketchError::invalid_input("dpi", self.dpi.to_string(), "DPI must be positive"));
        }
        Ok(())
    }
}

/// Output format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Pdf,
    Svg,
    Png,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> SketchResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ImageFormat::Pdf),
            "svg" => Ok(ImageFormat::Svg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(SketchError::unsupported_format(ext)),
        }
    }

    pub fn from_path(path: &Path) -> SketchResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Pdf => "pdf",
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world holding one detached source and the bundled fonts.
struct SketchWorld {
    main: Source,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl SketchWorld {
    fn new(source: String) -> Self {
        let fonts: Vec<Font> = typst_assets::fonts()
            .flat_map(|data| Font::iter(Bytes::new(data)))
            .collect();
        let book = FontBook::from_fonts(&fonts);

        SketchWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn compile(&self) -> SketchResult<PagedDocument> {
        let warned = typst::compile::<PagedDocument>(self);
        for warning in &warned.warnings {
            tracing::debug!(message = %warning.message, "typst warning");
        }
        warned.output.map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
            SketchError::render_failed("compile", msgs.join("; "))
        })
    }
}

impl World for SketchWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Typst Source Generation
// ============================================================================

/// Average glyph advance as a fraction of the font size
const CHAR_WIDTH_EM: f64 = 0.6;

/// Extent of the drawing on the page, in drawing units.
///
/// Text contributes an estimated box of `CHAR_WIDTH_EM * size` per character
/// by one line height, placed by its alignment and rotated about its anchor.
pub fn page_bounds(drawing: &Drawing, unit_pt: f64) -> Option<Bounds> {
    let mut points = Vec::new();
    for shape in drawing.shapes() {
        match shape {
            Shape::Text { anchor, content, style } => {
                let corners = text_corners(content, style, unit_pt);
                points.extend(corners.iter().map(|c| anchor.offset(c.x, c.y)));
            }
            _ => points.extend_from_slice(shape.points()),
        }
    }
    Bounds::from_points(&points)
}

/// Corners of the estimated text box relative to its anchor, y up
fn text_corners(content: &str, style: &TextStyle, unit_pt: f64) -> [Point; 4] {
    let w = CHAR_WIDTH_EM * style.size_pt * content.chars().count() as f64 / unit_pt;
    let h = style.size_pt / unit_pt;
    let (x0, x1) = match style.h_align {
        HAlign::Left => (0.0, w),
        HAlign::Center => (-w / 2.0, w / 2.0),
        HAlign::Right => (-w, 0.0),
    };
    let (y0, y1) = match style.v_align {
        VAlign::Baseline | VAlign::Bottom => (0.0, h),
        VAlign::Center => (-h / 2.0, h / 2.0),
        VAlign::Top => (-h, 0.0),
    };
    let (sin, cos) = (style.rotation.sin(), style.rotation.cos());
    [(x0, y0), (x1, y0), (x1, y1), (x0, y1)].map(|(x, y)| Point::new(x * cos - y * sin, x * sin + y * cos))
}

/// Build the Typst source for a drawing.
pub fn to_typst(drawing: &Drawing, settings: &ExportSettings) -> SketchResult<String> {
    settings.validate()?;
    let bounds = page_bounds(drawing, settings.unit_pt)
        .ok_or_else(|| SketchError::invalid_input("drawing", "empty", "Nothing has been drawn"))?;
    let viewport = Viewport::with_scale(bounds, settings.unit_pt);
    let (width, height) = viewport.extent();

    let fill = match settings.background {
        Some(color) => color_expr(color),
        None => "none".to_string(),
    };

    let mut src = String::new();
    let _ = writeln!(
        src,
        "#set page(width: auto, height: auto, margin: {}, fill: {})",
        pt(settings.margin_pt),
        fill
    );
    let _ = writeln!(src, "#box(width: {}, height: {})[", pt(width), pt(height));

    for shape in drawing.shapes() {
        match shape {
            Shape::Polyline { points, stroke } => {
                let _ = writeln!(src, "  #place(top + left, {})", curve_expr(&viewport, points, stroke));
            }
            Shape::Polygon { points, fill } => {
                let _ = writeln!(src, "  #place(top + left, {})", polygon_expr(&viewport, points, *fill));
            }
            Shape::Text { anchor, content, style } => {
                let _ = writeln!(src, "  {}", text_expr(viewport.to_screen(*anchor), content, style));
            }
        }
    }

    if settings.show_legend && !drawing.legend().is_empty() {
        let rows: Vec<String> = drawing
            .legend()
            .iter()
            .map(|entry| {
                format!(
                    "line(length: 16pt, stroke: {}), text(size: 9pt, {})",
                    stroke_expr(&entry.stroke),
                    typst_string(&entry.label)
                )
            })
            .collect();
        let _ = writeln!(
            src,
            "  #place(top + right, block(inset: 4pt, fill: white, stroke: 0.5pt + luma(180), grid(columns: 2, gutter: 4pt, align: horizon, {})))",
            rows.join(", ")
        );
    }

    src.push_str("]\n");
    Ok(src)
}

fn pt(v: f64) -> String {
    format!("{:.3}pt", v)
}

fn color_expr(color: Color) -> String {
    format!("rgb(\"{}\")", color.hex())
}

fn stroke_expr(stroke: &Stroke) -> String {
    let dash = match stroke.dash {
        Dash::Solid => "solid",
        Dash::Dashed => "dashed",
        Dash::DashDot => "dash-dotted",
        Dash::Dotted => "dotted",
    };
    format!(
        "(paint: {}, thickness: {}, dash: \"{}\", join: \"round\")",
        color_expr(stroke.color),
        pt(stroke.width_pt),
        dash
    )
}

fn coord(viewport: &Viewport, p: Point) -> String {
    let s = viewport.to_screen(p);
    format!("({}, {})", pt(s.x), pt(s.y))
}

fn curve_expr(viewport: &Viewport, points: &[Point], stroke: &Stroke) -> String {
    let mut out = format!("curve(stroke: {}", stroke_expr(stroke));
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { "move" } else { "line" };
        let _ = write!(out, ", curve.{}({})", op, coord(viewport, *p));
    }
    out.push(')');
    out
}

fn polygon_expr(viewport: &Viewport, points: &[Point], fill: Color) -> String {
    let vertices: Vec<String> = points.iter().map(|p| coord(viewport, *p)).collect();
    format!("polygon(fill: {}, stroke: none, {})", color_expr(fill), vertices.join(", "))
}

fn text_expr(at: Point, content: &str, style: &TextStyle) -> String {
    let h = match style.h_align {
        HAlign::Left => "left",
        HAlign::Center => "center",
        HAlign::Right => "right",
    };
    // With the bottom edge on the baseline, bottom alignment sits the
    // baseline on the anchor.
    let v = match style.v_align {
        VAlign::Baseline | VAlign::Bottom => "bottom",
        VAlign::Center => "horizon",
        VAlign::Top => "top",
    };
    let align = format!("{} + {}", h, v);
    let body = format!(
        "text(size: {}, fill: {}, bottom-edge: \"baseline\", {})",
        pt(style.size_pt),
        color_expr(style.color),
        typst_string(content)
    );
    let body = if style.rotation.is_zero() {
        body
    } else {
        // Typst rotates clockwise on a y-down page
        format!("rotate({:.3}deg, origin: {}, reflow: false, {})", -style.rotation.0, align, body)
    };
    format!(
        "#place(top + left, dx: {}, dy: {}, box(width: 0pt, height: 0pt, place({}, {})))",
        pt(at.x),
        pt(at.y),
        align,
        body
    )
}

/// Quote user text as a Typst string literal
fn typst_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

// ============================================================================
// Rendering
// ============================================================================

fn compile(drawing: &Drawing, settings: &ExportSettings) -> SketchResult<PagedDocument> {
    let source = to_typst(drawing, settings)?;
    tracing::debug!(shapes = drawing.len(), bytes = source.len(), "compiling drawing");
    SketchWorld::new(source).compile()
}

fn first_page(document: &PagedDocument) -> SketchResult<&typst::layout::Page> {
    document
        .pages
        .first()
        .ok_or_else(|| SketchError::render_failed("layout", "document has no pages"))
}

/// Render a drawing to PDF bytes.
pub fn render_pdf(drawing: &Drawing, settings: &ExportSettings) -> SketchResult<Vec<u8>> {
    let document = compile(drawing, settings)?;
    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        SketchError::render_failed("pdf", msgs.join("; "))
    })
}

/// Render a drawing to an SVG document.
pub fn render_svg(drawing: &Drawing, settings: &ExportSettings) -> SketchResult<String> {
    let document = compile(drawing, settings)?;
    Ok(typst_svg::svg(first_page(&document)?))
}

/// Render a drawing to PNG bytes at `settings.dpi`.
pub fn render_png(drawing: &Drawing, settings: &ExportSettings) -> SketchResult<Vec<u8>> {
    let document = compile(drawing, settings)?;
    let pixel_per_pt = (settings.dpi / 72.0) as f32;
    typst_render::render(first_page(&document)?, pixel_per_pt)
        .encode_png()
        .map_err(|e| SketchError::render_failed("png", e.to_string()))
}

/// Render a drawing in the given format.
pub fn render(drawing: &Drawing, format: ImageFormat, settings: &ExportSettings) -> SketchResult<Vec<u8>> {
    match format {
        ImageFormat::Pdf => render_pdf(drawing, settings),
        ImageFormat::Svg => render_svg(drawing, settings).map(String::into_bytes),
        ImageFormat::Png => render_png(drawing, settings),
    }
}

/// Render a drawing and write it to `path`, picking the format from the
/// extension.
///
/// The file is written to `<path>.tmp`, synced, then renamed over `path`,
/// so an existing image is never left half-written.
pub fn save(drawing: &Drawing, path: impl AsRef<Path>, settings: &ExportSettings) -> SketchResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let bytes = render(drawing, format, settings)?;

    let tmp_path = path.with_extension(format!("{}.tmp", format.extension()));
    replace_file(path, &tmp_path, |file| file.write_all(&bytes))?;

    tracing::debug!(path = %path.display(), format = format.extension(), bytes = bytes.len(), "image saved");
    Ok(())
}

/// Write `tmp_path` with `fill`, sync it and rename it over `path`.
/// The temp file is removed if any step fails.
fn replace_file(path: &Path, tmp_path: &Path, fill: impl FnOnce(&mut File) -> io::Result<()>) -> SketchResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        SketchError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    let written = fill(&mut tmp_file)
        .map_err(|e| SketchError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))
        .and_then(|_| {
            tmp_file.sync_all().map_err(|e| {
                SketchError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
            })
        });
    drop(tmp_file);
    if let Err(e) = written {
        let _ = fs::remove_file(tmp_path);
        return Err(e);
    }

    fs::rename(tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        SketchError::file_error("rename to final", path.display().to_string(), e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::canvas::Canvas;
    use crate::element::{draw_element, ElementOptions};
    use crate::style::LineFormat;
    use crate::supports::{draw_pinned, SupportOptions};
    use crate::vector::{draw_vector, VectorOptions};

    fn sample_drawing() -> Drawing {
        let mut drawing = Drawing::new();
        draw_element(&mut drawing, 0.0, 4.0, 0.0, 0.25, &ElementOptions::default());
        draw_pinned(&mut drawing, Point::origin(), &SupportOptions::labelled("A"));
        let opts = VectorOptions {
            show_magnitude: true,
            line: "r--".parse::<LineFormat>().unwrap(),
            ..VectorOptions::labelled("P \"1\"")
        };
        draw_vector(&mut drawing, Point::new(2.0, 2.0), Point::new(2.0, 0.25), &opts).unwrap();
        drawing
    }

    #[test]
    fn test_typst_source_contains_shapes() {
        let src = to_typst(&sample_drawing(), &ExportSettings::default()).unwrap();
        assert!(src.starts_with("#set page(width: auto, height: auto"));
        assert!(src.contains("curve(stroke: (paint: rgb(\"#ff0000\")"));
        assert!(src.contains("dash: \"dashed\""));
        assert!(src.contains("polygon(fill: rgb(\"#1f77b433\")"));
        assert!(src.contains("\"P \\\"1\\\"\""));
        assert!(!src.contains("grid(columns: 2"));

        // At least the 4 unit beam at 40pt per unit
        let bounds = page_bounds(&sample_drawing(), 40.0).unwrap();
        assert!(bounds.width() >= 4.0);
    }

    #[test]
    fn test_page_fits_text_extent() {
        let mut drawing = Drawing::new();
        drawing.polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)], &Stroke::default());
        let style = TextStyle {
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
            ..TextStyle::default()
        };
        drawing.text(Point::new(1.0, 0.0), "long label text", &style);

        // 15 chars * 0.6 * 10pt = 90pt past the right edge of the line
        let bounds = page_bounds(&drawing, 40.0).unwrap();
        assert!((bounds.max.x - 3.25).abs() < 1e-9);
        assert!((bounds.max.y - 0.25).abs() < 1e-9);

        let src = to_typst(&drawing, &ExportSettings::default()).unwrap();
        assert!(src.contains("#box(width: 130.000pt, height: 10.000pt)"));
    }

    #[test]
    fn test_rotated_text_extent() {
        let mut drawing = Drawing::new();
        drawing.polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)], &Stroke::default());
        let style = TextStyle {
            h_align: HAlign::Left,
            v_align: VAlign::Baseline,
            rotation: crate::units::Degrees(90.0),
            ..TextStyle::default()
        };
        drawing.text(Point::origin(), "abcd", &style);

        // 4 * 0.6 * 10pt = 24pt = 0.6 units straight up
        let bounds = page_bounds(&drawing, 40.0).unwrap();
        assert!((bounds.max.y - 0.6).abs() < 1e-9);
        assert!((bounds.min.x + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_legend_only_when_enabled() {
        let settings = ExportSettings {
            show_legend: true,
            ..ExportSettings::default()
        };
        let src = to_typst(&sample_drawing(), &settings).unwrap();
        assert!(src.contains("grid(columns: 2"));
    }

    #[test]
    fn test_empty_drawing_is_rejected() {
        let err = to_typst(&Drawing::new(), &ExportSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_bad_settings_are_rejected() {
        let settings = ExportSettings {
            unit_pt: 0.0,
            ..ExportSettings::default()
        };
        assert!(to_typst(&sample_drawing(), &settings).is_err());
    }

    #[test]
    fn test_validate_rejects_margin_and_dpi() {
        let negative_margin = ExportSettings {
            margin_pt: -1.0,
            ..ExportSettings::default()
        };
        let err = negative_margin.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("margin_pt"));

        for dpi in [0.0, -72.0, f64::NAN] {
            let settings = ExportSettings {
                dpi,
                ..ExportSettings::default()
            };
            assert!(settings.validate().is_err(), "dpi {} accepted", dpi);
        }

        let zero_margin = ExportSettings {
            margin_pt: 0.0,
            ..ExportSettings::default()
        };
        assert!(zero_margin.validate().is_ok());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a/b.PDF")).unwrap(), ImageFormat::Pdf);
        assert_eq!(ImageFormat::from_path(Path::new("fig.svg")).unwrap(), ImageFormat::Svg);
        let err = ImageFormat::from_path(Path::new("fig.jpg")).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
        assert!(ImageFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_typst_string_escapes() {
        assert_eq!(typst_string(r#"a\b"c"#), r#""a\\b\"c""#);
        assert_eq!(typst_string("x\ny"), "\"x\\ny\"");
    }

    #[test]
    fn test_pdf_generation() {
        let pdf = render_pdf(&sample_drawing(), &ExportSettings::default());
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        let bytes = pdf.unwrap();
        assert!(bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
    }

    #[test]
    fn test_svg_and_png_generation() {
        let svg = render_svg(&sample_drawing(), &ExportSettings::default()).unwrap();
        assert!(svg.contains("<svg"));

        let png = render_png(&sample_drawing(), &ExportSettings::default()).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_save_is_atomic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.svg");
        save(&sample_drawing(), &path, &ExportSettings::default()).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("figure.svg.tmp").exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        let tmp_path = dir.path().join("figure.png.tmp");

        let err = replace_file(&path, &tmp_path, |file| {
            file.write_all(b"partial")?;
            Err(io::Error::other("disk full"))
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!tmp_path.exists());
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file
        let path = dir.path().join("figure.svg");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        assert!(save(&sample_drawing(), &path, &ExportSettings::default()).is_err());
        assert!(!dir.path().join("figure.svg.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.bmp");
        assert!(save(&sample_drawing(), &path, &ExportSettings::default()).is_err());
        assert!(!path.exists());
    }
}
