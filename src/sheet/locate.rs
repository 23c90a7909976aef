// src/sheet/locate.rs
//
// The published page is usually the table itself, but the host sometimes
// serves a wrapper instead. Probe each URL shape in order until one holds
// `<table class="... waffle ...">`.

use crate::config::options::SourceOptions;
use crate::core::html::{Markup, strip_inert};
use crate::core::net::{Transport, fetch_text};
use crate::error::{LoadError, LoadResult};

/// The located data table, as its own HTML fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetTable {
    html: String,
    source: String,
}

impl SheetTable {
    pub fn new(html: impl Into<String>, source: impl Into<String>) -> Self {
        Self { html: html.into(), source: source.into() }
    }

    pub fn html(&self) -> &str { &self.html }

    /// URL the table was found at.
    pub fn source(&self) -> &str { &self.source }
}

/// First `<table>` carrying `class` in `doc`, outer HTML included.
pub fn find_table(doc: &str, class: &str) -> Option<String> {
    let clean = strip_inert(doc);
    let m = Markup::new(&clean);
    let span = m.element_with_class("table", class)?;
    Some(s!(m.outer(&span)))
}

/// Fetch URL shapes in order until one contains the table.
///
/// A network failure on the first shape is returned as is. On later shapes
/// it is logged and the shape counts as having no table.
pub fn locate_table(
    transport: &dyn Transport,
    src: &SourceOptions,
    class: &str,
) -> LoadResult<SheetTable> {
    let shapes = src.url_shapes();

    for (i, url) in shapes.iter().enumerate() {
        logf!("Locate: probing {url}");

        let doc = match fetch_text(transport, url, src) {
            Ok(doc) => doc,
            Err(e) if i == 0 => return Err(e.into()),
            Err(e) => {
                loge!("Locate: fetch of {url} failed: {e}");
                continue;
            }
        };

        if let Some(html) = find_table(&doc, class) {
            logf!("Locate: table.{class} found at {url} ({} bytes)", html.len());
            return Ok(SheetTable::new(html, url.as_str()));
        }
        logw!("Locate: no table.{class} at {url}");
    }

    Err(LoadError::TableNotFound { tried: shapes })
}
