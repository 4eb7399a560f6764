use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::pattern::FillPattern;
use crate::shape::{LineStyle, ShapeKind};

pub const MIN_LINE_WIDTH: u32 = 1;
pub const MAX_LINE_WIDTH: u32 = 50;

/// The current drawing configuration, owned by the toolbar and snapshotted
/// into each shape at pointer-down (colors, style, width, text) or
/// pointer-up (fill pattern). There is exactly one of these; shapes never
/// read the toolbar directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: ShapeKind,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub line_style: LineStyle,
    line_width: u32,
    pub fill_pattern: FillPattern,
    /// Content for the next text shape.
    pub text: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ShapeKind::Freehand,
            stroke_color: Color32::BLACK,
            fill_color: Color32::WHITE,
            line_style: LineStyle::Solid,
            line_width: 2,
            fill_pattern: FillPattern::Solid,
            text: String::new(),
        }
    }
}

impl ToolSettings {
    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    /// Sets the stroke width, clamped to `[MIN_LINE_WIDTH, MAX_LINE_WIDTH]`.
    pub fn set_line_width(&mut self, width: u32) {
        self.line_width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
    }
}
