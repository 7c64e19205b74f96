//! Iced canvas backend.
//!
//! [`FrameCanvas`] paints the drawing helpers straight onto an Iced canvas
//! [`Frame`]; [`DrawingView`] is a ready-made `canvas::Program` that shows a
//! recorded [`Drawing`] scaled to fit its widget bounds.
//!
//! Legend entries are only collected while drawing. Call
//! [`FrameCanvas::draw_legend`] once all helpers have run.

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Text};
use iced::{Rectangle, Renderer, Theme, Vector};

use crate::canvas::Canvas;
use crate::drawing::{Drawing, Legend};
use crate::geometry::{Bounds, Point, Viewport};
use crate::style::{Color, Dash, HAlign, Stroke, TextStyle, VAlign};

const DASHED: &[f32] = &[6.0, 4.0];
const DASH_DOT: &[f32] = &[6.0, 3.0, 1.5, 3.0];
const DOTTED: &[f32] = &[1.5, 3.0];

/// Row height of legend entries, in pixels
const LEGEND_ROW: f32 = 14.0;

fn to_iced_color(color: Color) -> iced::Color {
    iced::Color::from_rgba8(color.r, color.g, color.b, color.a as f32 / 255.0)
}

fn dash_segments(dash: Dash) -> &'static [f32] {
    match dash {
        Dash::Solid => &[],
        Dash::Dashed => DASHED,
        Dash::DashDot => DASH_DOT,
        Dash::Dotted => DOTTED,
    }
}

fn to_iced_stroke(stroke: &Stroke) -> canvas::Stroke<'static> {
    canvas::Stroke {
        line_dash: LineDash {
            segments: dash_segments(stroke.dash),
            offset: 0,
        },
        ..canvas::Stroke::default()
            .with_color(to_iced_color(stroke.color))
            .with_width(stroke.width_pt as f32)
    }
}

fn to_iced_point(p: Point) -> iced::Point {
    iced::Point::new(p.x as f32, p.y as f32)
}

/// Canvas over an Iced frame, mapping drawing units through a [`Viewport`].
pub struct FrameCanvas<'a> {
    frame: &'a mut Frame,
    viewport: Viewport,
    legend: Legend,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut Frame, viewport: Viewport) -> Self {
        FrameCanvas {
            frame,
            viewport,
            legend: Legend::new(),
        }
    }

    /// Fit `bounds` into the whole frame, keeping `margin` pixels free.
    pub fn fit(frame: &'a mut Frame, bounds: Bounds, margin: f32) -> Self {
        let viewport = Viewport::fit(bounds, frame.width() as f64, frame.height() as f64, margin as f64);
        Self::new(frame, viewport)
    }

    fn screen(&self, p: Point) -> iced::Point {
        to_iced_point(self.viewport.to_screen(p))
    }

    /// Legend rows collected so far
    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Paint the collected legend rows in the top-right corner of the frame.
    pub fn draw_legend(&mut self) {
        let right = self.frame.width() - 8.0;
        for (row, entry) in self.legend.entries().iter().enumerate() {
            let y = 8.0 + LEGEND_ROW * (row as f32 + 0.5);
            let sample = Path::line(iced::Point::new(right - 20.0, y), iced::Point::new(right, y));
            self.frame.stroke(&sample, to_iced_stroke(&entry.stroke));
            self.frame.fill_text(Text {
                content: entry.label.clone(),
                position: iced::Point::new(right - 24.0, y),
                color: iced::Color::BLACK,
                size: iced::Pixels(11.0),
                align_x: iced::alignment::Horizontal::Right.into(),
                align_y: iced::alignment::Vertical::Center.into(),
                ..Text::default()
            });
        }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<iced::Point> = points.iter().map(|p| self.screen(*p)).collect();
        let path = Path::new(|builder| {
            builder.move_to(screen[0]);
            for p in &screen[1..] {
                builder.line_to(*p);
            }
        });
        self.frame.stroke(&path, to_iced_stroke(stroke));
    }

    fn fill_polygon(&mut self, points: &[Point], fill: Color) {
        if points.len() < 3 {
            return;
        }
        let screen: Vec<iced::Point> = points.iter().map(|p| self.screen(*p)).collect();
        let path = Path::new(|builder| {
            builder.move_to(screen[0]);
            for p in &screen[1..] {
                builder.line_to(*p);
            }
            builder.close();
        });
        self.frame.fill(&path, to_iced_color(fill));
    }

    fn text(&mut self, anchor: Point, content: &str, style: &TextStyle) {
        let align_x = match style.h_align {
            HAlign::Left => iced::alignment::Horizontal::Left,
            HAlign::Center => iced::alignment::Horizontal::Center,
            HAlign::Right => iced::alignment::Horizontal::Right,
        };
        let align_y = match style.v_align {
            VAlign::Baseline | VAlign::Bottom => iced::alignment::Vertical::Bottom,
            VAlign::Center => iced::alignment::Vertical::Center,
            VAlign::Top => iced::alignment::Vertical::Top,
        };
        let text = Text {
            content: content.to_string(),
            position: iced::Point::ORIGIN,
            color: to_iced_color(style.color),
            size: iced::Pixels(style.size_pt as f32),
            align_x: align_x.into(),
            align_y: align_y.into(),
            ..Text::default()
        };

        let at = self.screen(anchor);
        // Glyphs are not rotated by every renderer; the anchor always is.
        let angle = -style.rotation.to_radians().0 as f32;
        self.frame.with_save(|frame| {
            frame.translate(Vector::new(at.x, at.y));
            if angle != 0.0 {
                frame.rotate(angle);
            }
            frame.fill_text(text);
        });
    }

    fn legend_entry(&mut self, label: &str, stroke: &Stroke) {
        self.legend.add(label, stroke);
    }
}

/// Canvas program that displays a recorded drawing.
pub struct DrawingView {
    drawing: Drawing,
    margin: f32,
    background: Option<Color>,
    show_legend: bool,
}

impl DrawingView {
    pub fn new(drawing: Drawing) -> Self {
        DrawingView {
            drawing,
            margin: 20.0,
            background: None,
            show_legend: false,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }
}

impl<Message> canvas::Program<Message> for DrawingView {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(color) = self.background {
            frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), to_iced_color(color));
        }

        if let Some(extent) = self.drawing.bounds() {
            let mut canvas = FrameCanvas::fit(&mut frame, extent, self.margin);
            self.drawing.replay(&mut canvas);
            if self.show_legend {
                canvas.draw_legend();
            }
        }

        vec![frame.into_geometry()]
    }
}
