// src/gui/components/card_grid.rs
//
// Renders the catalog's current view as a wrapped grid of cards.
// Purely a view: all decisions about what to show come from Catalog::present.

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, vec2};

use crate::{
    config::consts::{CARD_IMAGE_H, CARD_W, MSG_NO_IMAGE, MSG_NO_RESULTS, MSG_UNTITLED},
    gui::app::App,
    sheet::Record,
    sink::Sink,
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let mut sink = CardSink { ui };
    app.catalog.present(&app.state.gui.query, &mut sink);
}

/// `Sink` that paints into an egui `Ui`.
pub struct CardSink<'u> {
    pub ui: &'u mut egui::Ui,
}

impl Sink for CardSink<'_> {
    fn loading(&mut self, on: bool) {
        if on {
            self.ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.label("Loading…");
            });
        }
    }

    fn records(&mut self, items: &[&Record]) {
        egui::ScrollArea::vertical()
            .id_salt("card_grid_scroll")
            .auto_shrink([false, false])
            .show(self.ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = vec2(12.0, 12.0);
                    for item in items {
                        card(ui, item);
                    }
                });
            });
    }

    fn empty(&mut self) {
        notice(self.ui, RichText::new(MSG_NO_RESULTS));
    }

    fn error(&mut self, msg: &str) {
        let color = self.ui.visuals().error_fg_color;
        notice(self.ui, RichText::new(msg).color(color));
    }
}

fn notice(ui: &mut egui::Ui, text: RichText) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(text.size(16.0));
    });
}

fn card(ui: &mut egui::Ui, item: &Record) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.set_width(CARD_W);

            let img_size = vec2(CARD_W, CARD_IMAGE_H);
            if item.image.is_empty() {
                let (rect, _) = ui.allocate_exact_size(img_size, Sense::hover());
                let painter = ui.painter();
                painter.rect_filled(rect, 4.0, Color32::from_gray(235));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    MSG_NO_IMAGE,
                    FontId::proportional(13.0),
                    Color32::from_gray(160),
                );
            } else {
                ui.add(
                    egui::Image::new(item.image.as_str())
                        .fit_to_exact_size(img_size)
                        .show_loading_spinner(true),
                )
                .on_hover_text(item.name.as_str());
            }

            let title = if item.name.is_empty() { MSG_UNTITLED } else { item.name.as_str() };
            ui.label(RichText::new(title).strong().size(16.0));

            if !item.description.is_empty() {
                ui.label(RichText::new(&item.description).small());
            }

            ui.horizontal(|ui| {
                ui.label(RichText::new(&item.branch).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let pieces = if item.pieces.is_empty() { "0" } else { item.pieces.as_str() };
                    ui.label(RichText::new(format!("{pieces} pcs")).strong());
                });
            });
        });
    });
}
