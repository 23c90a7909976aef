// src/sink.rs

use crate::sheet::Record;

/// Where the catalog's current view goes. Frontends implement this.
///
/// Each presentation starts with `loading`. Once a load has settled it is
/// followed by exactly one of `records`, `empty` or `error`.
pub trait Sink {
    /// Whether a load is in flight.
    fn loading(&mut self, _on: bool) {}

    /// Non-empty matching records, in sheet order.
    fn records(&mut self, _items: &[&Record]) {}

    /// Loaded fine, nothing matches.
    fn empty(&mut self) {}

    /// The load failed; `msg` is user-facing.
    fn error(&mut self, _msg: &str) {}
}
