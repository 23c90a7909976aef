// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{Receiver, TryRecvError},
};

use eframe::egui;

use crate::{
    catalog::Catalog,
    config::state::AppState,
    error::{LoadError, LoadResult, NetError},
    pipeline,
    sheet::RecordSet,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sheet Catalog",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // loaded records + load state (UI thread only)
    pub catalog: Catalog,

    // result channel of the in-flight load, if any
    pending: Option<Receiver<LoadResult<RecordSet>>>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        // card thumbnails are remote URLs
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            state,
            catalog: Catalog::new(),
            pending: None,
        };
        logf!("Init: source={}", app.state.options.source.sheet_url);
        app.start_load(&cc.egui_ctx);
        app
    }

    /// Kick off a background load unless one is running.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if !self.catalog.begin_load() {
            return;
        }
        let ctx = ctx.clone();
        self.pending = Some(pipeline::spawn_load(
            self.state.options.clone(),
            move || ctx.request_repaint(),
        ));
    }

    /// Take a finished load result off the channel, if there is one.
    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else { return };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::Network(NetError::Request {
                url: self.state.options.source.sheet_url.clone(),
                reason: s!("load worker stopped without a result"),
            })),
        };
        self.pending = None;
        self.catalog.complete(result);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            crate::gui::components::status_line::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::card_grid::draw(ui, self);
        });
    }
}
