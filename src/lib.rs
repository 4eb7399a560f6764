#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod panels;
pub mod pattern;
pub mod renderer;
pub mod shape;
pub mod tool;

pub use app::SketchApp;
pub use command::{CanvasCommand, CommandQueue};
pub use config::ToolSettings;
pub use document::Document;
pub use error::SwatchError;
pub use input::PointerEvent;
pub use pattern::FillPattern;
pub use shape::{LineStyle, Shape, ShapeId, ShapeKind};
pub use tool::DrawTool;
