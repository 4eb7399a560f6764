use thiserror::Error;

/// Failure to rasterize a pattern preview. Never fatal: the toolbar shows a
/// text label instead of the missing swatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwatchError {
    #[error("swatch size must be at least one pixel")]
    EmptySwatch,
}
