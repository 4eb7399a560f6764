use crate::command::{CanvasCommand, CommandQueue};
use crate::config::ToolSettings;
use crate::document::Document;
use crate::input::PointerEvent;
use crate::panels;
use crate::pattern::{FillPattern, SwatchCache};
use crate::shape::Shape;
use crate::tool::DrawTool;

/// We derive Deserialize/Serialize so tool settings persist across runs.
/// The drawing itself is session-only: document, tool state, pending
/// commands and swatch textures are all skipped.
#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchApp {
    settings: ToolSettings,
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    tool: DrawTool,
    #[serde(skip)]
    commands: CommandQueue,
    #[serde(skip)]
    swatches: SwatchCache,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The uncommitted shape currently being drawn, if any.
    pub fn in_progress(&self) -> Option<&Shape> {
        self.tool.in_progress()
    }

    /// Queues an undo message; it is consumed exactly once at the top of the
    /// next frame.
    pub fn request_undo(&mut self) {
        self.commands.push(CanvasCommand::Undo);
    }

    /// Feeds a canvas pointer event through the drawing state machine and
    /// commits the resulting shape, if the event finished one.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if let Some(shape) = self.tool.handle_event(event, &self.settings) {
            log::info!("committed {} shape {}", shape.kind().label(), shape.id());
            self.document.commit(shape);
        }
    }

    pub fn refresh_swatches(&mut self, ctx: &egui::Context) {
        self.swatches.ensure(ctx, self.settings.fill_color);
    }

    pub fn swatch_texture(&self, pattern: FillPattern) -> Option<&egui::TextureHandle> {
        self.swatches.texture(pattern)
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.commands.apply_pending(&mut self.document);

        if ctx.input(|input| input.modifiers.command && input.key_pressed(egui::Key::Z)) {
            self.request_undo();
        }

        panels::toolbar_panel(self, ctx);
        panels::canvas_panel(self, ctx);
    }
}
