use serde::{Deserialize, Serialize};

mod lines;
mod swatch;

pub use lines::{LINE_SPACING, Segment, circle_pattern_lines, rect_pattern_lines};
pub use swatch::{CHECKER_BLOCK, STROKE_SPACING, SWATCH_SIZE, SwatchCache, swatch_image};

/// Fill texture of a committed shape. `Solid` paints the fill color itself;
/// every other variant is rendered as synthesized line overlays
/// ([`rect_pattern_lines`] / [`circle_pattern_lines`]) and previewed in the
/// toolbar via [`swatch_image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillPattern {
    Solid,
    Horizontal,
    Vertical,
    DiagonalRight,
    DiagonalLeft,
    Cross,
    Checkered,
}

impl FillPattern {
    pub const ALL: [FillPattern; 7] = [
        FillPattern::Solid,
        FillPattern::Horizontal,
        FillPattern::Vertical,
        FillPattern::DiagonalRight,
        FillPattern::DiagonalLeft,
        FillPattern::Cross,
        FillPattern::Checkered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FillPattern::Solid => "Solid",
            FillPattern::Horizontal => "Horizontal",
            FillPattern::Vertical => "Vertical",
            FillPattern::DiagonalRight => "Diagonal right",
            FillPattern::DiagonalLeft => "Diagonal left",
            FillPattern::Cross => "Cross",
            FillPattern::Checkered => "Checkered",
        }
    }
}
