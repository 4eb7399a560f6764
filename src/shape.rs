use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ToolSettings;
use crate::pattern::FillPattern;

/// Unique identifier for a shape, assigned once at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The drawable kinds a tool can produce. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Freehand,
    Line,
    Rectangle,
    Square,
    Circle,
    Text,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Freehand,
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Freehand => "Pen",
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Circle => "Circle",
            ShapeKind::Text => "Text",
        }
    }
}

/// Dash style of a shape's outline. Never affects fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl LineStyle {
    pub const ALL: [LineStyle; 3] = [LineStyle::Solid, LineStyle::Dashed, LineStyle::Dotted];

    pub fn label(self) -> &'static str {
        match self {
            LineStyle::Solid => "Solid",
            LineStyle::Dashed => "Dashed",
            LineStyle::Dotted => "Dotted",
        }
    }

    /// Dash and gap lengths, or `None` for a continuous stroke.
    pub fn dash_pattern(self) -> Option<(f32, f32)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((10.0, 5.0)),
            LineStyle::Dotted => Some((2.0, 2.0)),
        }
    }
}

/// A committed or in-progress drawable object.
///
/// Everything snapshotted at pointer-down (kind, origin, colors, line
/// style/width, text) is immutable afterwards; geometry mutates through
/// [`Shape::update_to`] while drawing, and the fill pattern is stamped by
/// [`Shape::finalize`] at commit.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    points: Vec<Pos2>,
    origin: Pos2,
    width: f32,
    height: f32,
    radius: Option<f32>,
    stroke_color: Color32,
    fill_color: Color32,
    fill_pattern: Option<FillPattern>,
    pattern_color: Option<Color32>,
    line_style: LineStyle,
    line_width: u32,
    text: Option<String>,
}

impl Shape {
    /// Starts a new shape at `origin`, snapshotting the current drawing
    /// configuration.
    pub fn begin(settings: &ToolSettings, origin: Pos2) -> Self {
        let kind = settings.tool;
        let points = match kind {
            // A line rubber-bands: both endpoints exist from the start.
            ShapeKind::Line => vec![origin, origin],
            _ => vec![origin],
        };
        Self {
            id: ShapeId::new(),
            kind,
            points,
            origin,
            width: 0.0,
            height: 0.0,
            radius: matches!(kind, ShapeKind::Circle).then_some(0.0),
            stroke_color: settings.stroke_color,
            fill_color: settings.fill_color,
            fill_pattern: None,
            pattern_color: None,
            line_style: settings.line_style,
            line_width: settings.line_width(),
            text: matches!(kind, ShapeKind::Text).then(|| settings.text.clone()),
        }
    }

    /// Applies a pointer-move at `pos` to the in-progress geometry.
    pub fn update_to(&mut self, pos: Pos2) {
        match self.kind {
            ShapeKind::Freehand => self.points.push(pos),
            ShapeKind::Line => {
                if let Some(end) = self.points.last_mut() {
                    *end = pos;
                }
            }
            ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Circle | ShapeKind::Text => {
                self.width = (pos.x - self.origin.x).abs();
                self.height = (pos.y - self.origin.y).abs();
                if matches!(self.kind, ShapeKind::Circle) {
                    self.radius = Some(self.origin.distance(pos));
                }
            }
        }
    }

    /// Stamps the fill pattern and its color from the configuration current
    /// at pointer-up. Until then both stay unset and the shape renders as an
    /// outline-only preview.
    pub fn finalize(&mut self, settings: &ToolSettings) {
        self.fill_pattern = Some(settings.fill_pattern);
        self.pattern_color = Some(settings.fill_color);
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn origin(&self) -> Pos2 {
        self.origin
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn radius(&self) -> Option<f32> {
        self.radius
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    pub fn fill_pattern(&self) -> Option<FillPattern> {
        self.fill_pattern
    }

    pub fn pattern_color(&self) -> Option<Color32> {
        self.pattern_color
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
