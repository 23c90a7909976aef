// src/sheet/mod.rs
//! Reading the published sheet.
//!
//! - `locate`: find the data table in fetched HTML, probing the inner-sheet
//!   URL when the published page is only a wrapper.
//! - `extract`: turn the table's body rows into [`Record`]s.
//! - `columns`: which cell holds which field, and how a header row is spotted.
//!
//! Nothing here caches or renders; see `catalog` and `gui` for that.
mod columns;
mod extract;
mod locate;
mod record;

pub use columns::{Column, ColumnLayout, HeaderRule, SentinelHeader};
pub use extract::{extract_records, extract_with};
pub use locate::{SheetTable, find_table, locate_table};
pub use record::{Record, RecordSet};
