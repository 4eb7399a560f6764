use egui::{Pos2, pos2};

use super::FillPattern;

/// Spacing between synthesized pattern lines, in canvas units. Coarser than
/// the swatch raster's stroke interval; the two are independent knobs.
pub const LINE_SPACING: f32 = 10.0;

/// One synthesized overlay line. Purely visual: segments carry no hit or
/// selection semantics, and their order is generation order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Pos2,
    pub end: Pos2,
}

impl Segment {
    pub fn new(start: Pos2, end: Pos2) -> Self {
        Self { start, end }
    }
}

/// Synthesizes the overlay lines approximating `pattern` inside a rectangle
/// anchored at `origin` with the given extents.
pub fn rect_pattern_lines(
    origin: Pos2,
    width: f32,
    height: f32,
    pattern: FillPattern,
) -> Vec<Segment> {
    let mut segments = Vec::new();
    match pattern {
        FillPattern::Solid => {}
        FillPattern::Horizontal => rect_horizontal(&mut segments, origin, width, height),
        FillPattern::Vertical => rect_vertical(&mut segments, origin, width, height),
        FillPattern::DiagonalRight => rect_diagonal(&mut segments, origin, width, height, false),
        FillPattern::DiagonalLeft => rect_diagonal(&mut segments, origin, width, height, true),
        FillPattern::Cross => {
            rect_diagonal(&mut segments, origin, width, height, false);
            rect_diagonal(&mut segments, origin, width, height, true);
        }
        FillPattern::Checkered => {
            rect_horizontal(&mut segments, origin, width, height);
            rect_vertical(&mut segments, origin, width, height);
        }
    }
    segments
}

fn rect_horizontal(out: &mut Vec<Segment>, origin: Pos2, width: f32, height: f32) {
    let rows = (height / LINE_SPACING).floor() as i32;
    for i in 0..rows {
        let y = origin.y + i as f32 * LINE_SPACING;
        out.push(Segment::new(pos2(origin.x, y), pos2(origin.x + width, y)));
    }
}

fn rect_vertical(out: &mut Vec<Segment>, origin: Pos2, width: f32, height: f32) {
    let columns = (width / LINE_SPACING).floor() as i32;
    for i in 0..columns {
        let x = origin.x + i as f32 * LINE_SPACING;
        out.push(Segment::new(pos2(x, origin.y), pos2(x, origin.y + height)));
    }
}

/// 45-degree hatching. Each segment is offset horizontally by the rectangle's
/// height so the pitch stays constant across the whole bounding box.
fn rect_diagonal(out: &mut Vec<Segment>, origin: Pos2, width: f32, height: f32, leftward: bool) {
    let count = ((width + height) / LINE_SPACING).floor() as i32;
    for i in 0..count {
        let offset = i as f32 * LINE_SPACING;
        let (start_y, end_y) = if leftward {
            (origin.y + height, origin.y)
        } else {
            (origin.y, origin.y + height)
        };
        out.push(Segment::new(
            pos2(origin.x + offset, start_y),
            pos2(origin.x - height + offset, end_y),
        ));
    }
}

/// Synthesizes the overlay lines approximating `pattern` inside a circle.
///
/// Segments span the circle's bounding square and are not clipped to the
/// circular boundary, so they can visually overrun the edge.
pub fn circle_pattern_lines(center: Pos2, radius: f32, pattern: FillPattern) -> Vec<Segment> {
    let mut segments = Vec::new();
    if radius <= 0.0 {
        return segments;
    }
    match pattern {
        FillPattern::Solid => {}
        FillPattern::Horizontal => circle_horizontal(&mut segments, center, radius),
        FillPattern::Vertical => circle_vertical(&mut segments, center, radius),
        FillPattern::DiagonalRight => circle_diagonal(&mut segments, center, radius, radius),
        FillPattern::DiagonalLeft => circle_diagonal(&mut segments, center, radius, -radius),
        FillPattern::Cross => {
            // The X-hatch sweeps a band twice as wide so both families cover
            // the far corners of the bounding square.
            let mut j = -radius * 2.0;
            while j <= radius * 2.0 {
                segments.push(Segment::new(
                    pos2(center.x + j, center.y - radius),
                    pos2(center.x + j + radius, center.y + radius),
                ));
                j += LINE_SPACING;
            }
            let mut j = -radius * 2.0;
            while j <= radius * 2.0 {
                segments.push(Segment::new(
                    pos2(center.x + j, center.y - radius),
                    pos2(center.x + j - radius, center.y + radius),
                ));
                j += LINE_SPACING;
            }
        }
        FillPattern::Checkered => {
            circle_horizontal(&mut segments, center, radius);
            circle_vertical(&mut segments, center, radius);
        }
    }
    segments
}

fn circle_horizontal(out: &mut Vec<Segment>, center: Pos2, radius: f32) {
    let mut y = center.y - radius;
    while y <= center.y + radius {
        out.push(Segment::new(
            pos2(center.x - radius, y),
            pos2(center.x + radius, y),
        ));
        y += LINE_SPACING;
    }
}

fn circle_vertical(out: &mut Vec<Segment>, center: Pos2, radius: f32) {
    let mut x = center.x - radius;
    while x <= center.x + radius {
        out.push(Segment::new(
            pos2(x, center.y - radius),
            pos2(x, center.y + radius),
        ));
        x += LINE_SPACING;
    }
}

fn circle_diagonal(out: &mut Vec<Segment>, center: Pos2, radius: f32, end_offset: f32) {
    let mut i = -radius;
    while i <= radius * 2.0 {
        out.push(Segment::new(
            pos2(center.x + i, center.y - radius),
            pos2(center.x + i + end_offset, center.y + radius),
        ));
        i += LINE_SPACING;
    }
}
