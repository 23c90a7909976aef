// src/catalog.rs
//
// The one place loaded records live.
//
//   Idle ──begin_load──▶ Loading ──complete(Ok)──▶ Ready
//                           │
//                           └──complete(Err)──▶ Failed
//
// Ready/Failed may go back to Loading on an explicit reload.
// Only `complete` replaces the record set, and only wholesale.

use crate::config::consts::MSG_LOAD_FAILED;
use crate::error::LoadError;
use crate::search::SearchView;
use crate::sheet::RecordSet;
use crate::sink::Sink;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(RecordSet),
    Failed(LoadError),
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle       => "Idle",
            LoadState::Loading    => "Loading",
            LoadState::Ready(_)   => "Ready",
            LoadState::Failed(_)  => "Failed",
        }
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    state: LoadState,
    empty: RecordSet,
}

impl Catalog {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &LoadState { &self.state }
    pub fn is_loading(&self) -> bool { matches!(self.state, LoadState::Loading) }

    /// Enter Loading. Refused (false) while a load is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            logw!("Catalog: load already in progress");
            return false;
        }
        logf!("Catalog: {} -> Loading", self.state.name());
        self.state = LoadState::Loading;
        true
    }

    /// Settle a running load. Ignored (false) unless Loading.
    pub fn complete(&mut self, result: Result<RecordSet, LoadError>) -> bool {
        if !self.is_loading() {
            logw!("Catalog: stray load result while {}", self.state.name());
            return false;
        }
        self.state = match result {
            Ok(set) => {
                logf!("Catalog: Loading -> Ready ({} records)", set.len());
                LoadState::Ready(set)
            }
            Err(e) => {
                loge!("Catalog: Loading -> Failed: {e}");
                LoadState::Failed(e)
            }
        };
        true
    }

    /// Loaded records; empty unless Ready.
    pub fn records(&self) -> &RecordSet {
        match &self.state {
            LoadState::Ready(set) => set,
            _ => &self.empty,
        }
    }

    /// Filtered view for `query`; empty unless Ready.
    pub fn search(&self, query: &str) -> SearchView<'_> {
        SearchView::new(self.records(), query)
    }

    /// Push the current view for `query` into `sink`.
    pub fn present(&self, query: &str, sink: &mut dyn Sink) {
        match &self.state {
            LoadState::Idle => sink.loading(false),
            LoadState::Loading => sink.loading(true),
            LoadState::Failed(_) => {
                sink.loading(false);
                sink.error(MSG_LOAD_FAILED);
            }
            LoadState::Ready(_) => {
                sink.loading(false);
                let view = self.search(query);
                if view.is_empty() {
                    sink.empty();
                } else {
                    sink.records(&view.records());
                }
            }
        }
    }
}
