// src/core/html.rs
//
// Tolerant tag scanning over raw HTML text.
// Tag and attribute names match case-insensitively; values keep their case.
// No DOM is built: callers walk spans of the source string.

use super::sanitize::decode_entities;

/// ASCII-only lowercasing. Keeps byte offsets identical to the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte index just past the `>` closing the tag that starts at `lt`.
/// Quoted attribute values may contain `>`.
fn tag_end(s: &str, lt: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = lt + 1;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i + 1),
            None => {}
        }
        i += 1;
    }
    None
}

fn is_name_boundary(b: Option<&u8>) -> bool {
    matches!(b, Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
}

/// Tags that end an element whose own end tag was omitted.
struct ImpliedEnd {
    opens: &'static [&'static str],
    closes: &'static [&'static str],
}

fn implied_end(name: &str) -> Option<ImpliedEnd> {
    match to_lower(name).as_str() {
        "td" | "th" => Some(ImpliedEnd {
            opens: &["td", "th", "tr", "tbody", "thead", "tfoot"],
            closes: &["tr", "tbody", "thead", "tfoot", "table"],
        }),
        "tr" => Some(ImpliedEnd {
            opens: &["tr", "tbody", "thead", "tfoot"],
            closes: &["tbody", "thead", "tfoot", "table"],
        }),
        "tbody" | "thead" | "tfoot" => Some(ImpliedEnd {
            opens: &["tbody", "thead", "tfoot"],
            closes: &["table"],
        }),
        _ => None,
    }
}

/// An element located in the source: `<x ...>` at `start..open_end`,
/// inner content at `open_end..close_start`, `</x>` ending at `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub open_end: usize,
    pub close_start: usize,
    pub end: usize,
}

/// Source text paired with its lowercased shadow for tag matching.
pub struct Markup<'a> {
    src: &'a str,
    lc: String,
}

impl<'a> Markup<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    /// Byte length of the source; the usual `until` for a whole-document scan.
    pub fn end(&self) -> usize { self.src.len() }

    /// Next `<name ...>` in `from..until`. Returns (start, open_end).
    pub fn open_tag(&self, name: &str, from: usize, until: usize) -> Option<(usize, usize)> {
        let needle = format!("<{}", to_lower(name));
        let mut pos = from;
        while pos < until {
            let start = self.lc.get(pos..until)?.find(&needle)? + pos;
            let after = start + needle.len();
            if is_name_boundary(self.lc.as_bytes().get(after)) {
                let end = tag_end(self.src, start)?;
                return (end <= until).then_some((start, end));
            }
            pos = after;
        }
        None
    }

    /// Next `</name>` in `from..until`. Returns (start, end).
    fn close_tag(&self, name: &str, from: usize, until: usize) -> Option<(usize, usize)> {
        let needle = format!("</{}", to_lower(name));
        let mut pos = from;
        while pos < until {
            let start = self.lc.get(pos..until)?.find(&needle)? + pos;
            let after = start + needle.len();
            if is_name_boundary(self.lc.as_bytes().get(after)) {
                let end = self.src[after..until].find('>').map_or(until, |i| after + i + 1);
                return Some((start, end));
            }
            pos = after;
        }
        None
    }

    /// First `name` element in `from..until`, matching nested same-name tags.
    /// An unclosed element runs to `until`. Table parts whose end tag may be
    /// left out stop where the next sibling or the enclosing section begins.
    pub fn element(&self, name: &str, from: usize, until: usize) -> Option<Span> {
        let (start, open_end) = self.open_tag(name, from, until)?;
        if self.src[start..open_end].ends_with("/>") {
            return Some(Span { start, open_end, close_start: open_end, end: open_end });
        }
        if let Some(ends) = implied_end(name) {
            return Some(self.implied_element(name, start, open_end, until, &ends));
        }

        let mut depth = 1usize;
        let mut pos = open_end;
        loop {
            let next_open = self.open_tag(name, pos, until);
            match (next_open, self.close_tag(name, pos, until)) {
                (Some((os, oe)), Some((cs, _))) if os < cs => {
                    depth += 1;
                    pos = oe;
                }
                (_, Some((cs, ce))) => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Span { start, open_end, close_start: cs, end: ce });
                    }
                    pos = ce;
                }
                (_, None) => {
                    return Some(Span { start, open_end, close_start: until, end: until });
                }
            }
        }
    }

    /// Row, cell or section: ends at its own close tag, or implicitly at the
    /// first tag in `ends`. A table nested inside is skipped whole.
    fn implied_element(&self, name: &str, start: usize, open_end: usize, until: usize, ends: &ImpliedEnd) -> Span {
        let mut pos = open_end;
        loop {
            let stop = self.first_mark(ends, pos, until);
            let own = self.close_tag(name, pos, stop.unwrap_or(until));
            let limit = own.map(|(cs, _)| cs).or(stop).unwrap_or(until);

            let nested = self
                .open_tag("table", pos, limit)
                .and_then(|(ts, _)| self.element("table", ts, until));
            if let Some(table) = nested {
                pos = table.end.max(table.open_end);
                continue;
            }

            return match own {
                Some((cs, ce)) => Span { start, open_end, close_start: cs, end: ce },
                None => {
                    let at = stop.unwrap_or(until);
                    Span { start, open_end, close_start: at, end: at }
                }
            };
        }
    }

    /// Start of the earliest tag listed in `ends` within `from..until`.
    fn first_mark(&self, ends: &ImpliedEnd, from: usize, until: usize) -> Option<usize> {
        let mut limit = until;
        let mut best = None;
        for name in ends.opens {
            if let Some((at, _)) = self.open_tag(name, from, limit) {
                best = Some(at);
                limit = at;
            }
        }
        for name in ends.closes {
            if let Some((at, _)) = self.close_tag(name, from, limit) {
                best = Some(at);
                limit = at;
            }
        }
        best
    }

    /// Sibling `name` elements in `from..until`, in document order.
    /// Nested occurrences belong to their enclosing element and are not listed.
    pub fn elements(&self, name: &str, from: usize, until: usize) -> Vec<Span> {
        let mut out = Vec::new();
        let mut pos = from;
        while let Some(span) = self.element(name, pos, until) {
            pos = span.end.max(span.open_end);
            out.push(span);
        }
        out
    }

    /// First `name` element whose class list contains `class`.
    pub fn element_with_class(&self, name: &str, class: &str) -> Option<Span> {
        let mut pos = 0usize;
        while let Some((start, open_end)) = self.open_tag(name, pos, self.end()) {
            if has_class(&self.src[start..open_end], class) {
                return self.element(name, start, self.end());
            }
            pos = open_end;
        }
        None
    }

    pub fn inner(&self, span: &Span) -> &'a str { &self.src[span.open_end..span.close_start] }
    pub fn outer(&self, span: &Span) -> &'a str { &self.src[span.start..span.end] }
}

/// Raw value of attribute `name` in an opening tag like `<img src="x" alt=y>`.
/// Entities are left encoded.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let body = open_tag.strip_prefix('<').unwrap_or(open_tag);
    let body = body.strip_suffix('>').unwrap_or(body);
    // `/>` only closes the tag when it can't be part of an unquoted value
    let body = match body.strip_suffix('/') {
        Some(b) if b.ends_with(|c: char| c.is_ascii_whitespace() || c == '"' || c == '\'') => b,
        _ => body,
    };
    let bytes = body.as_bytes();
    let n = bytes.len();

    // skip the tag name
    let mut i = 0usize;
    while i < n && !bytes[i].is_ascii_whitespace() { i += 1; }

    while i < n {
        while i < n && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') { i += 1; }
        let name_start = i;
        while i < n && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' { i += 1; }
        let attr = &body[name_start..i];
        while i < n && bytes[i].is_ascii_whitespace() { i += 1; }

        let value = if i < n && bytes[i] == b'=' {
            i += 1;
            while i < n && bytes[i].is_ascii_whitespace() { i += 1; }
            match bytes.get(i) {
                Some(&q) if q == b'"' || q == b'\'' => {
                    let v_start = i + 1;
                    let v_end = body[v_start..].find(q as char).map_or(n, |e| v_start + e);
                    i = (v_end + 1).min(n);
                    &body[v_start..v_end]
                }
                _ => {
                    let v_start = i;
                    while i < n && !bytes[i].is_ascii_whitespace() { i += 1; }
                    &body[v_start..i]
                }
            }
        } else {
            ""
        };

        if !attr.is_empty() && attr.eq_ignore_ascii_case(name) {
            return Some(s!(value));
        }
    }
    None
}

pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr_value(open_tag, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Remove comments and `<script>`/`<style>` bodies so their text
/// can't be mistaken for markup.
pub fn strip_inert(doc: &str) -> String {
    let mut out = String::with_capacity(doc.len());
    let mut rest = doc;

    loop {
        let lc = to_lower(rest);
        let next = [
            lc.find("<!--").map(|i| (i, "-->")),
            find_tag_start(&lc, "<script").map(|i| (i, "</script")),
            find_tag_start(&lc, "<style").map(|i| (i, "</style")),
        ]
        .into_iter()
        .flatten()
        .min_by_key(|(i, _)| *i);

        let Some((at, close)) = next else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..at]);

        let Some(close_at) = lc[at..].find(close).map(|i| at + i) else {
            return out; // unterminated: drop the tail
        };
        let after = if close == "-->" {
            close_at + close.len()
        } else {
            rest[close_at..].find('>').map_or(rest.len(), |i| close_at + i + 1)
        };
        rest = &rest[after..];
    }
}

fn find_tag_start(lc: &str, needle: &str) -> Option<usize> {
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(needle) {
        let at = pos + rel;
        if is_name_boundary(lc.as_bytes().get(at + needle.len())) {
            return Some(at);
        }
        pos = at + needle.len();
    }
    None
}

/// Remove all `<...>` tags, keeping text.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Visible text of a fragment: tags stripped, entities decoded, trimmed.
pub fn text_content(fragment: &str) -> String {
    s!(decode_entities(&strip_tags(fragment)).trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_tag_respects_name_boundary() {
        let html = "<thead></thead><th>x</th><td class=a>y</td>";
        let m = Markup::new(html);
        let (s, e) = m.open_tag("td", 0, m.end()).unwrap();
        assert_eq!(&html[s..e], "<td class=a>");
        assert!(m.open_tag("th", 0, 7).is_none());
    }

    #[test]
    fn tag_end_skips_quoted_gt() {
        let html = r#"<td title="a>b">x</td>"#;
        let m = Markup::new(html);
        let span = m.element("td", 0, m.end()).unwrap();
        assert_eq!(m.inner(&span), "x");
    }

    #[test]
    fn element_matches_nested_same_name() {
        let html = "<div>a<div>b</div>c</div><div>d</div>";
        let m = Markup::new(html);
        let spans = m.elements("div", 0, m.end());
        assert_eq!(spans.len(), 2);
        assert_eq!(m.inner(&spans[0]), "a<div>b</div>c");
        assert_eq!(m.inner(&spans[1]), "d");
    }

    #[test]
    fn unclosed_element_runs_to_limit() {
        let html = "<TD>open";
        let m = Markup::new(html);
        let span = m.element("td", 0, m.end()).unwrap();
        assert_eq!(m.inner(&span), "open");
    }

    #[test]
    fn element_with_class_checks_tokens() {
        let html = r#"<table class="waffle-x"></table><TABLE CLASS="grid waffle no-grid"><tr></tr></TABLE>"#;
        let m = Markup::new(html);
        let span = m.element_with_class("table", "waffle").unwrap();
        assert!(m.outer(&span).starts_with("<TABLE CLASS="));
        assert!(m.element_with_class("table", "missing").is_none());
    }

    #[test]
    fn attr_value_variants() {
        assert_eq!(attr_value(r#"<img src="a.png" alt='x y'>"#, "src").as_deref(), Some("a.png"));
        assert_eq!(attr_value(r#"<img alt='x y' SRC=b.png>"#, "src").as_deref(), Some("b.png"));
        assert_eq!(attr_value(r#"<img data-src="no" src = "c.png" />"#, "src").as_deref(), Some("c.png"));
        assert_eq!(attr_value("<img hidden>", "src"), None);
    }

    #[test]
    fn attr_value_keeps_slash_of_unquoted_value() {
        assert_eq!(attr_value("<img src=https://img.test/a/>", "src").as_deref(), Some("https://img.test/a/"));
        assert_eq!(attr_value("<img src=a.png />", "src").as_deref(), Some("a.png"));
        assert_eq!(attr_value(r#"<img src="b.png"/>"#, "src").as_deref(), Some("b.png"));
    }

    #[test]
    fn cells_without_end_tags_stop_at_next_cell() {
        let html = "<tr><td><img src=x.png><td>Widget<th>1<td>12</tr>";
        let m = Markup::new(html);
        let tr = m.element("tr", 0, m.end()).unwrap();
        let cells: Vec<&str> = m.elements("td", tr.open_end, tr.close_start).iter().map(|c| m.inner(c)).collect();
        assert_eq!(cells, vec!["<img src=x.png>", "Widget", "12"]);
    }

    #[test]
    fn rows_without_end_tags_stop_at_next_row() {
        let html = "<tbody><tr><td>a</td><tr><td>b</td></tbody><tfoot><tr><td>f</tfoot>";
        let m = Markup::new(html);
        let body = m.element("tbody", 0, m.end()).unwrap();
        let rows: Vec<&str> = m.elements("tr", body.open_end, body.close_start).iter().map(|r| m.inner(r)).collect();
        assert_eq!(rows, vec!["<td>a</td>", "<td>b</td>"]);
    }

    #[test]
    fn table_nested_in_cell_keeps_its_rows() {
        let html = "<tr><td><table><tr><td>in</td></tr></table><td>out</tr><tr><td>next</tr>";
        let m = Markup::new(html);
        let rows = m.elements("tr", 0, m.end());
        assert_eq!(rows.len(), 2);
        let cells = m.elements("td", rows[0].open_end, rows[0].close_start);
        assert_eq!(cells.len(), 2);
        assert_eq!(m.inner(&cells[1]), "out");
    }

    #[test]
    fn strip_inert_drops_comments_and_scripts() {
        let doc = r#"a<!-- <table class="waffle"> -->b<script type="x">var t = "<table class=waffle>";</script>c<style>td{}</style>d"#;
        assert_eq!(strip_inert(doc), "abcd");
    }

    #[test]
    fn strip_inert_keeps_lookalike_tags() {
        assert_eq!(strip_inert("<scripted>x</scripted>"), "<scripted>x</scripted>");
    }

    #[test]
    fn text_content_decodes_and_trims() {
        assert_eq!(text_content("  <div>Fish &amp; Chips</div>\n"), "Fish & Chips");
        assert_eq!(text_content("<b>a</b><i>b</i>"), "ab");
    }
}
