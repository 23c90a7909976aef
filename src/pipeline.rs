// src/pipeline.rs
//
// One load: locate the table, extract rows, build the record set.
// All-or-nothing: any failure yields an error, never a partial set.

use std::sync::mpsc;
use std::thread;

use crate::catalog::Catalog;
use crate::config::options::AppOptions;
use crate::core::net::{HttpTransport, Transport};
use crate::error::LoadResult;
use crate::sheet::{RecordSet, extract_records, locate_table};
use crate::sink::Sink;

pub fn load_records(transport: &dyn Transport, opts: &AppOptions) -> LoadResult<RecordSet> {
    let table = locate_table(transport, &opts.source, &opts.extract.table_class)?;
    let set = RecordSet::new(extract_records(&table, &opts.extract));
    logf!("Load: OK, {} record(s)", set.len());
    Ok(set)
}

/// Load synchronously into `catalog`, then present the unfiltered view.
/// Does nothing if a load is already running.
pub fn load_into(
    catalog: &mut Catalog,
    transport: &dyn Transport,
    opts: &AppOptions,
    sink: &mut dyn Sink,
) {
    if !catalog.begin_load() {
        return;
    }
    sink.loading(true);
    catalog.complete(load_records(transport, opts));
    catalog.present("", sink);
}

/// Load on a worker thread over HTTP. The result arrives on the returned
/// channel; `on_done` runs right after it is sent.
pub fn spawn_load<F>(opts: AppOptions, on_done: F) -> mpsc::Receiver<LoadResult<RecordSet>>
where
    F: FnOnce() + Send + 'static,
{
    match HttpTransport::new(&opts.source) {
        Ok(transport) => spawn_load_with(transport, opts, on_done),
        Err(e) => {
            loge!("Load: could not build HTTP client: {e}");
            let (tx, rx) = mpsc::channel();
            let _ = tx.send(Err(e.into()));
            on_done();
            rx
        }
    }
}

pub fn spawn_load_with<T, F>(transport: T, opts: AppOptions, on_done: F) -> mpsc::Receiver<LoadResult<RecordSet>>
where
    T: Transport + Send + 'static,
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load_records(&transport, &opts);
        let _ = tx.send(result); // receiver gone means the UI closed
        on_done();
    });
    rx
}
