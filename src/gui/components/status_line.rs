// src/gui/components/status_line.rs
use eframe::egui;

use crate::{catalog::LoadState, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let text = match app.catalog.state() {
        LoadState::Idle => s!("Idle"),
        LoadState::Loading => s!("Loading…"),
        LoadState::Failed(e) => format!("Load failed: {e}"),
        LoadState::Ready(set) => {
            let view = app.catalog.search(&app.state.gui.query);
            format!("Showing {} of {}", view.len(), set.len())
        }
    };
    ui.label(egui::RichText::new(text).small());
}
