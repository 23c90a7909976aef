// src/gui/components/search_bar.rs
//
// Query box + Reload. Every edit re-filters on the next frame; nothing is fetched.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let loading = app.catalog.is_loading();
        if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
            logf!("UI: Reload requested");
            app.start_load(ui.ctx());
        }

        let edit = egui::TextEdit::singleline(&mut app.state.gui.query)
            .hint_text("Search name, description, branch, pieces…")
            .desired_width(f32::INFINITY);
        if ui.add(edit).changed() {
            logd!("UI: query {:?}", app.state.gui.query);
        }
    });
    ui.add_space(6.0);
}
