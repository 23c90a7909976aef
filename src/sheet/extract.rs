// src/sheet/extract.rs
//
// Table body rows → Records.
// Cells are `<td>` only; the export's row-number `<th>` cells are skipped.
// Short rows are padded with empty fields, never rejected.

use super::columns::{Column, ColumnLayout, HeaderRule};
use super::locate::SheetTable;
use super::record::Record;
use crate::config::options::ExtractOptions;
use crate::core::html::{Markup, Span, attr_value, text_content};
use crate::core::sanitize::decode_entities;

pub fn extract_records(table: &SheetTable, opts: &ExtractOptions) -> Vec<Record> {
    let records = extract_with(table.html(), &opts.layout, &opts.header);
    logf!("Extract: {} record(s) from {}", records.len(), table.source());
    records
}

/// Extract with an explicit layout and header rule.
pub fn extract_with(table_html: &str, layout: &ColumnLayout, header: &dyn HeaderRule) -> Vec<Record> {
    let body = without_sections(table_html, &["thead", "tfoot"]);
    let rows = body_rows(&body);

    let Some(first) = rows.first() else {
        logd!("Extract: table has no body rows");
        return Vec::new();
    };

    let skip = first
        .first()
        .map(|cell| header.is_header(&text_content(cell)))
        .unwrap_or(false);
    if skip {
        logd!("Extract: first row is a header, skipping it");
    }

    let mut out = Vec::with_capacity(rows.len());
    let mut nameless = 0usize;

    for cells in rows.iter().skip(usize::from(skip)) {
        let record = read_row(cells, layout);
        if record.name.is_empty() {
            nameless += 1;
            continue;
        }
        out.push(record);
    }

    if nameless > 0 {
        logd!("Extract: dropped {nameless} row(s) without a name");
    }
    out
}

/* ---------- helpers ---------- */

/// Drop the listed sections (with their contents) from a table fragment.
fn without_sections(html: &str, tags: &[&str]) -> String {
    let m = Markup::new(html);
    let mut cut: Vec<Span> = tags
        .iter()
        .flat_map(|t| m.elements(t, 0, m.end()))
        .collect();
    cut.sort_by_key(|s| s.start);

    let mut out = String::with_capacity(html.len());
    let mut pos = 0usize;
    for span in cut {
        if span.start < pos { continue; } // inside an earlier cut
        out.push_str(&html[pos..span.start]);
        pos = span.end;
    }
    out.push_str(&html[pos..]);
    out
}

/// Inner HTML of each `<td>`, per `<tr>`, in document order.
fn body_rows(html: &str) -> Vec<Vec<&str>> {
    let m = Markup::new(html);
    m.elements("tr", 0, m.end())
        .iter()
        .map(|tr| {
            m.elements("td", tr.open_end, tr.close_start)
                .iter()
                .map(|td| m.inner(td))
                .collect()
        })
        .collect()
}

fn read_row(cells: &[&str], layout: &ColumnLayout) -> Record {
    let text = |col: Column| {
        cells
            .get(layout.index(col))
            .map(|c| text_content(c))
            .unwrap_or_default()
    };

    Record {
        image: cells
            .get(layout.index(Column::Image))
            .and_then(|c| image_src(c))
            .unwrap_or_default(),
        name: text(Column::Name),
        description: text(Column::Description),
        branch: text(Column::Branch),
        pieces: text(Column::Pieces),
    }
}

/// `src` of the first `<img>` in a cell.
fn image_src(cell: &str) -> Option<String> {
    let m = Markup::new(cell);
    let (s, e) = m.open_tag("img", 0, m.end())?;
    attr_value(&cell[s..e], "src").map(|v| s!(decode_entities(&v).trim()))
}
