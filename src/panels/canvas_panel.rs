use egui::Context;

use crate::app::SketchApp;
use crate::input;
use crate::renderer;

/// The drawing surface: everything not taken by the toolbar. Pointer
/// gestures over it drive the drawing state machine; the scene repaints
/// every frame from the document plus the in-progress overlay.
pub fn canvas_panel(app: &mut SketchApp, ctx: &Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        for event in input::pointer_events(&response) {
            app.handle_pointer_event(event);
        }
        renderer::paint_scene(&painter, app.document(), app.in_progress());
    });
}
