use std::collections::HashMap;

use egui::{Color32, ColorImage, TextureHandle, TextureOptions};

use super::FillPattern;
use crate::error::SwatchError;

/// Edge length of a toolbar preview swatch, in pixels.
pub const SWATCH_SIZE: usize = 20;
/// Interval between raster strokes inside a swatch. Denser than the
/// [`super::LINE_SPACING`] used for shape overlays; the two are independent
/// knobs.
pub const STROKE_SPACING: usize = 4;
/// Block size of the checker swatch.
pub const CHECKER_BLOCK: usize = 8;

const STROKE_THICKNESS: usize = 2;

/// Rasterizes a square, tileable preview of `pattern` in `color` over a
/// transparent background.
pub fn swatch_image(
    pattern: FillPattern,
    color: Color32,
    size: usize,
) -> Result<ColorImage, SwatchError> {
    if size == 0 {
        return Err(SwatchError::EmptySwatch);
    }
    let mut image = ColorImage::new([size, size], Color32::TRANSPARENT);
    match pattern {
        FillPattern::Solid => {
            for pixel in &mut image.pixels {
                *pixel = color;
            }
        }
        FillPattern::Horizontal => {
            for y in (0..size).step_by(STROKE_SPACING) {
                paint_hline(&mut image, y, color);
            }
        }
        FillPattern::Vertical => {
            for x in (0..size).step_by(STROKE_SPACING) {
                paint_vline(&mut image, x, color);
            }
        }
        FillPattern::DiagonalRight => paint_diagonals(&mut image, Slope::Rising, color),
        FillPattern::DiagonalLeft => paint_diagonals(&mut image, Slope::Falling, color),
        // The swatch's cross is a horizontal/vertical grid, unlike the
        // X-hatch overlay of the same name.
        FillPattern::Cross => {
            for y in (0..size).step_by(STROKE_SPACING) {
                paint_hline(&mut image, y, color);
            }
            for x in (0..size).step_by(STROKE_SPACING) {
                paint_vline(&mut image, x, color);
            }
        }
        FillPattern::Checkered => {
            for y in (0..size).step_by(CHECKER_BLOCK) {
                for x in (0..size).step_by(CHECKER_BLOCK) {
                    if (x / CHECKER_BLOCK + y / CHECKER_BLOCK) % 2 == 0 {
                        paint_block(&mut image, x, y, color);
                    }
                }
            }
        }
    }
    Ok(image)
}

enum Slope {
    /// Up-right at 45 degrees.
    Rising,
    /// Down-right at 45 degrees.
    Falling,
}

fn paint_hline(image: &mut ColorImage, y: usize, color: Color32) {
    let [width, height] = image.size;
    for row in y..(y + STROKE_THICKNESS).min(height) {
        for x in 0..width {
            image.pixels[row * width + x] = color;
        }
    }
}

fn paint_vline(image: &mut ColorImage, x: usize, color: Color32) {
    let [width, height] = image.size;
    for column in x..(x + STROKE_THICKNESS).min(width) {
        for y in 0..height {
            image.pixels[y * width + column] = color;
        }
    }
}

/// Strokes start off-canvas so the diagonals tile seamlessly.
fn paint_diagonals(image: &mut ColorImage, slope: Slope, color: Color32) {
    let size = image.size[0] as i32;
    let mut start = -size;
    while start < size * 2 {
        for step in 0..size {
            let x = start + step;
            let y = match slope {
                Slope::Falling => step,
                Slope::Rising => size - 1 - step,
            };
            paint_dot(image, x, y, color);
        }
        start += STROKE_SPACING as i32;
    }
}

fn paint_block(image: &mut ColorImage, x: usize, y: usize, color: Color32) {
    let [width, height] = image.size;
    for row in y..(y + CHECKER_BLOCK).min(height) {
        for column in x..(x + CHECKER_BLOCK).min(width) {
            image.pixels[row * width + column] = color;
        }
    }
}

fn paint_dot(image: &mut ColorImage, x: i32, y: i32, color: Color32) {
    for dy in 0..STROKE_THICKNESS as i32 {
        for dx in 0..STROKE_THICKNESS as i32 {
            set_pixel(image, x + dx, y + dy, color);
        }
    }
}

fn set_pixel(image: &mut ColorImage, x: i32, y: i32, color: Color32) {
    let [width, height] = image.size;
    if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
        image.pixels[y as usize * width + x as usize] = color;
    }
}

/// Uploaded preview textures for every pattern, keyed by pattern and tied to
/// the fill color they were rasterized with. All seven swatches regenerate
/// eagerly whenever the fill color changes.
#[derive(Default)]
pub struct SwatchCache {
    color: Option<Color32>,
    textures: HashMap<FillPattern, TextureHandle>,
}

impl SwatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure(&mut self, ctx: &egui::Context, fill_color: Color32) {
        if self.color == Some(fill_color) {
            return;
        }
        self.textures.clear();
        for pattern in FillPattern::ALL {
            match swatch_image(pattern, fill_color, SWATCH_SIZE) {
                Ok(image) => {
                    let texture = ctx.load_texture(
                        format!("swatch-{}", pattern.label()),
                        image,
                        TextureOptions::NEAREST,
                    );
                    self.textures.insert(pattern, texture);
                }
                Err(err) => log::warn!("no preview for {} fill: {err}", pattern.label()),
            }
        }
        self.color = Some(fill_color);
    }

    pub fn texture(&self, pattern: FillPattern) -> Option<&TextureHandle> {
        self.textures.get(&pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(image: &ColorImage, x: usize, y: usize) -> Color32 {
        image.pixels[y * image.size[0] + x]
    }

    #[test]
    fn zero_size_swatch_is_rejected() {
        assert_eq!(
            swatch_image(FillPattern::Solid, Color32::RED, 0),
            Err(SwatchError::EmptySwatch)
        );
    }

    #[test]
    fn solid_swatch_covers_every_pixel() {
        let image = swatch_image(FillPattern::Solid, Color32::RED, SWATCH_SIZE).unwrap();
        assert!(image.pixels.iter().all(|&p| p == Color32::RED));
    }

    #[test]
    fn horizontal_swatch_strokes_every_fourth_row() {
        let image = swatch_image(FillPattern::Horizontal, Color32::BLUE, SWATCH_SIZE).unwrap();
        // Rows 0 and 1 are a stroke, rows 2 and 3 the gap.
        assert_eq!(pixel(&image, 0, 0), Color32::BLUE);
        assert_eq!(pixel(&image, 10, 1), Color32::BLUE);
        assert_eq!(pixel(&image, 0, 2), Color32::TRANSPARENT);
        assert_eq!(pixel(&image, 10, 3), Color32::TRANSPARENT);
        assert_eq!(pixel(&image, 0, 4), Color32::BLUE);
    }

    #[test]
    fn vertical_swatch_strokes_every_fourth_column() {
        let image = swatch_image(FillPattern::Vertical, Color32::BLUE, SWATCH_SIZE).unwrap();
        assert_eq!(pixel(&image, 0, 10), Color32::BLUE);
        assert_eq!(pixel(&image, 1, 10), Color32::BLUE);
        assert_eq!(pixel(&image, 2, 10), Color32::TRANSPARENT);
    }

    #[test]
    fn cross_swatch_is_a_grid() {
        let image = swatch_image(FillPattern::Cross, Color32::BLUE, SWATCH_SIZE).unwrap();
        // Both a stroke row and a stroke column pass through (0, 10)/(10, 0);
        // the cell interior stays clear.
        assert_eq!(pixel(&image, 0, 10), Color32::BLUE);
        assert_eq!(pixel(&image, 10, 0), Color32::BLUE);
        assert_eq!(pixel(&image, 2, 2), Color32::TRANSPARENT);
    }

    #[test]
    fn checkered_swatch_alternates_filled_blocks() {
        let image = swatch_image(FillPattern::Checkered, Color32::GREEN, SWATCH_SIZE).unwrap();
        assert_eq!(pixel(&image, 0, 0), Color32::GREEN);
        assert_eq!(pixel(&image, 8, 0), Color32::TRANSPARENT);
        assert_eq!(pixel(&image, 8, 8), Color32::GREEN);
        assert_eq!(pixel(&image, 16, 0), Color32::GREEN);
    }

    #[test]
    fn diagonal_swatches_reach_both_corners() {
        let rising = swatch_image(FillPattern::DiagonalRight, Color32::BLACK, SWATCH_SIZE).unwrap();
        // The stroke starting at the left edge runs bottom-left to top-right.
        assert_eq!(pixel(&rising, 0, SWATCH_SIZE - 1), Color32::BLACK);

        let falling = swatch_image(FillPattern::DiagonalLeft, Color32::BLACK, SWATCH_SIZE).unwrap();
        assert_eq!(pixel(&falling, 0, 0), Color32::BLACK);
    }
}
