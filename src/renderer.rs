use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, pos2, vec2};

use crate::document::Document;
use crate::pattern::{FillPattern, Segment, circle_pattern_lines, rect_pattern_lines};
use crate::shape::{LineStyle, Shape, ShapeKind};

/// Font size for text shapes.
const TEXT_FONT_SIZE: f32 = 16.0;
/// Pattern overlays are hairlines regardless of the shape's stroke width.
const OVERLAY_STROKE_WIDTH: f32 = 1.0;
/// Segments used to approximate a circle outline when it has to be dashed.
const CIRCLE_OUTLINE_STEPS: usize = 64;

/// Paints the committed shapes in chronological order, then the in-progress
/// shape (if any) as an overlay on top.
pub fn paint_scene(painter: &Painter, document: &Document, in_progress: Option<&Shape>) {
    for shape in document.shapes() {
        paint_shape(painter, shape);
    }
    if let Some(shape) = in_progress {
        paint_shape(painter, shape);
    }
}

pub fn paint_shape(painter: &Painter, shape: &Shape) {
    match shape.kind() {
        ShapeKind::Freehand | ShapeKind::Line => paint_polyline(painter, shape),
        ShapeKind::Rectangle | ShapeKind::Square => paint_rect(painter, shape),
        ShapeKind::Circle => paint_circle(painter, shape),
        ShapeKind::Text => paint_text(painter, shape),
    }
}

fn outline_stroke(shape: &Shape) -> Stroke {
    Stroke::new(shape.line_width() as f32, shape.stroke_color())
}

/// The fill-pattern overlay to draw, if the shape has been committed with a
/// non-solid pattern. In-progress shapes have no stamped pattern yet and
/// therefore preview as outlines only.
fn pattern_overlay(shape: &Shape) -> Option<(FillPattern, Color32)> {
    match shape.fill_pattern() {
        Some(pattern) if pattern != FillPattern::Solid => {
            Some((pattern, shape.pattern_color().unwrap_or(shape.stroke_color())))
        }
        _ => None,
    }
}

fn has_solid_fill(shape: &Shape) -> bool {
    shape.fill_pattern() == Some(FillPattern::Solid)
}

fn paint_path(painter: &Painter, points: Vec<Pos2>, style: LineStyle, stroke: Stroke) {
    if points.len() < 2 {
        return;
    }
    match style.dash_pattern() {
        Some((dash, gap)) => {
            painter.extend(egui::Shape::dashed_line(&points, stroke, dash, gap));
        }
        None => {
            painter.add(egui::Shape::line(points, stroke));
        }
    }
}

fn paint_polyline(painter: &Painter, shape: &Shape) {
    paint_path(
        painter,
        shape.points().to_vec(),
        shape.line_style(),
        outline_stroke(shape),
    );
}

fn paint_rect(painter: &Painter, shape: &Shape) {
    let rect = Rect::from_min_size(shape.origin(), vec2(shape.width(), shape.height()));
    if has_solid_fill(shape) {
        painter.rect_filled(rect, 0.0, shape.fill_color());
    }
    match shape.line_style() {
        LineStyle::Solid => {
            painter.rect_stroke(rect, 0.0, outline_stroke(shape));
        }
        _ => paint_path(
            painter,
            vec![
                rect.min,
                pos2(rect.max.x, rect.min.y),
                rect.max,
                pos2(rect.min.x, rect.max.y),
                rect.min,
            ],
            shape.line_style(),
            outline_stroke(shape),
        ),
    }
    if let Some((pattern, color)) = pattern_overlay(shape) {
        let segments = rect_pattern_lines(shape.origin(), shape.width(), shape.height(), pattern);
        paint_segments(painter, &segments, color);
    }
}

fn paint_circle(painter: &Painter, shape: &Shape) {
    let Some(radius) = shape.radius() else {
        return;
    };
    let center = shape.origin();
    if has_solid_fill(shape) {
        painter.circle_filled(center, radius, shape.fill_color());
    }
    match shape.line_style() {
        LineStyle::Solid => {
            painter.circle_stroke(center, radius, outline_stroke(shape));
        }
        _ => paint_path(
            painter,
            circle_outline(center, radius),
            shape.line_style(),
            outline_stroke(shape),
        ),
    }
    if let Some((pattern, color)) = pattern_overlay(shape) {
        let segments = circle_pattern_lines(center, radius, pattern);
        paint_segments(painter, &segments, color);
    }
}

fn paint_text(painter: &Painter, shape: &Shape) {
    let Some(text) = shape.text() else {
        return;
    };
    if text.is_empty() {
        return;
    }
    painter.text(
        shape.origin(),
        Align2::LEFT_TOP,
        text,
        FontId::proportional(TEXT_FONT_SIZE),
        shape.stroke_color(),
    );
}

fn paint_segments(painter: &Painter, segments: &[Segment], color: Color32) {
    let stroke = Stroke::new(OVERLAY_STROKE_WIDTH, color);
    for segment in segments {
        painter.line_segment([segment.start, segment.end], stroke);
    }
}

fn circle_outline(center: Pos2, radius: f32) -> Vec<Pos2> {
    (0..=CIRCLE_OUTLINE_STEPS)
        .map(|i| {
            let angle = i as f32 / CIRCLE_OUTLINE_STEPS as f32 * std::f32::consts::TAU;
            pos2(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolSettings;
    use crate::tool::DrawTool;

    fn test_painter() -> Painter {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0));
        Painter::new(ctx, egui::LayerId::background(), rect)
    }

    fn committed(kind: ShapeKind, pattern: FillPattern, from: Pos2, to: Pos2) -> Shape {
        let mut settings = ToolSettings::default();
        settings.tool = kind;
        settings.fill_pattern = pattern;
        let mut tool = DrawTool::new();
        tool.pointer_down(from, &settings);
        tool.pointer_move(to);
        tool.pointer_up(&settings).expect("shape in progress")
    }

    #[test]
    fn paints_every_kind_without_panicking() {
        let painter = test_painter();
        let mut document = Document::new();
        for kind in ShapeKind::ALL {
            document.commit(committed(
                kind,
                FillPattern::Cross,
                pos2(10.0, 10.0),
                pos2(90.0, 70.0),
            ));
        }
        paint_scene(&painter, &document, None);
    }

    #[test]
    fn paints_dashed_and_dotted_outlines() {
        let painter = test_painter();
        let mut settings = ToolSettings::default();
        settings.tool = ShapeKind::Rectangle;
        let mut document = Document::new();
        for style in LineStyle::ALL {
            settings.line_style = style;
            let mut tool = DrawTool::new();
            tool.pointer_down(pos2(10.0, 10.0), &settings);
            tool.pointer_move(pos2(60.0, 40.0));
            document.commit(tool.pointer_up(&settings).expect("shape in progress"));
        }
        paint_scene(&painter, &document, None);
    }

    #[test]
    fn paints_in_progress_overlay() {
        let painter = test_painter();
        let document = Document::new();
        let settings = ToolSettings::default();
        let mut tool = DrawTool::new();
        tool.pointer_down(pos2(5.0, 5.0), &settings);
        tool.pointer_move(pos2(25.0, 25.0));
        paint_scene(&painter, &document, tool.in_progress());
    }
}
