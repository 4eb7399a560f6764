use egui::{Color32, Context, vec2};

use crate::app::SketchApp;
use crate::config::{MAX_LINE_WIDTH, MIN_LINE_WIDTH};
use crate::pattern::{FillPattern, SWATCH_SIZE};
use crate::shape::{LineStyle, ShapeKind};

/// Fixed palette offered next to the free color picker.
const PALETTE: [Color32; 15] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xff, 0xff, 0xff),
    Color32::from_rgb(0xff, 0x00, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x00),
    Color32::from_rgb(0x00, 0x00, 0xff),
    Color32::from_rgb(0xff, 0xff, 0x00),
    Color32::from_rgb(0xff, 0x00, 0xff),
    Color32::from_rgb(0x00, 0xff, 0xff),
    Color32::from_rgb(0x80, 0x80, 0x80),
    Color32::from_rgb(0x80, 0x00, 0x00),
    Color32::from_rgb(0x80, 0x80, 0x00),
    Color32::from_rgb(0x00, 0x80, 0x00),
    Color32::from_rgb(0x80, 0x00, 0x80),
    Color32::from_rgb(0x00, 0x80, 0x80),
    Color32::from_rgb(0x00, 0x00, 0x80),
];

pub fn toolbar_panel(app: &mut SketchApp, ctx: &Context) {
    egui::SidePanel::left("toolbar")
        .resizable(false)
        .default_width(210.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            for kind in ShapeKind::ALL {
                let selected = app.settings().tool == kind;
                if ui.selectable_label(selected, kind.label()).clicked() && !selected {
                    log::info!("tool selected: {}", kind.label());
                    app.settings_mut().tool = kind;
                }
            }
            if app.settings().tool == ShapeKind::Text {
                ui.horizontal(|ui| {
                    ui.label("Text:");
                    ui.text_edit_singleline(&mut app.settings_mut().text);
                });
            }

            ui.separator();
            ui.label("Line style");
            ui.horizontal(|ui| {
                for style in LineStyle::ALL {
                    let selected = app.settings().line_style == style;
                    if ui.selectable_label(selected, style.label()).clicked() {
                        app.settings_mut().line_style = style;
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("Width:");
                let mut width = app.settings().line_width();
                if ui
                    .add(egui::Slider::new(&mut width, MIN_LINE_WIDTH..=MAX_LINE_WIDTH))
                    .changed()
                {
                    app.settings_mut().set_line_width(width);
                }
            });

            ui.separator();
            ui.label("Stroke color");
            let mut stroke_color = app.settings().stroke_color;
            color_row(ui, &mut stroke_color);
            app.settings_mut().stroke_color = stroke_color;

            ui.label("Fill color");
            let mut fill_color = app.settings().fill_color;
            color_row(ui, &mut fill_color);
            app.settings_mut().fill_color = fill_color;

            ui.separator();
            ui.label("Fill pattern");
            // All swatches regenerate whenever the fill color changed.
            app.refresh_swatches(ctx);
            let swatch_side = SWATCH_SIZE as f32;
            ui.horizontal_wrapped(|ui| {
                for pattern in FillPattern::ALL {
                    let selected = app.settings().fill_pattern == pattern;
                    let clicked = match app.swatch_texture(pattern) {
                        Some(texture) => ui
                            .add(
                                egui::ImageButton::new((
                                    texture.id(),
                                    vec2(swatch_side, swatch_side),
                                ))
                                .selected(selected),
                            )
                            .on_hover_text(pattern.label())
                            .clicked(),
                        // A shape can still be committed with a pattern whose
                        // preview failed; offer its name instead.
                        None => ui.selectable_label(selected, pattern.label()).clicked(),
                    };
                    if clicked {
                        app.settings_mut().fill_pattern = pattern;
                    }
                }
            });

            ui.separator();
            let can_undo = !app.document().is_empty();
            if ui
                .add_enabled(can_undo, egui::Button::new("Undo"))
                .clicked()
            {
                app.request_undo();
            }
        });
}

fn color_row(ui: &mut egui::Ui, color: &mut Color32) {
    ui.horizontal_wrapped(|ui| {
        egui::color_picker::color_edit_button_srgba(ui, color, egui::color_picker::Alpha::Opaque);
        for swatch in PALETTE {
            let (rect, response) = ui.allocate_exact_size(vec2(16.0, 16.0), egui::Sense::click());
            ui.painter().rect_filled(rect, 2.0, swatch);
            ui.painter()
                .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, Color32::DARK_GRAY));
            if response.clicked() {
                *color = swatch;
            }
        }
    });
}
