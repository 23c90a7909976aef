// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use sheet_catalog::config::options::{AppOptions, SourceOptions};
use sheet_catalog::core::net::{Transport, proxied_url};
use sheet_catalog::error::NetError;
use sheet_catalog::sheet::Record;

pub const PAGE: &str = "https://sheet.test/d/e/abc/pubhtml";

/// Canned responses by exact URL. Unknown URLs fail like a CORS rejection.
/// Clones share the call log.
#[derive(Clone, Default)]
pub struct FakeTransport {
    bodies: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeTransport {
    pub fn serve(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn get_text(&self, url: &str) -> Result<String, NetError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.bodies.get(url).cloned().ok_or_else(|| NetError::Request {
            url: url.to_string(),
            reason: "blocked".to_string(),
        })
    }
}

/// Plain-HTTP server on localhost answering by request path.
/// Unknown paths get a 404 page. Returns the base URL and the request log.
pub fn http_server(routes: &[(&str, u16, String)]) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let routes: HashMap<String, (u16, String)> =
        routes.iter().map(|(p, st, b)| (p.to_string(), (*st, b.clone()))).collect();
    let log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            // drain headers
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 2).unwrap_or(false) {
                line.clear();
            }

            let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            seen.lock().unwrap().push(path.clone());
            let (status, body) = routes
                .get(&path)
                .cloned()
                .unwrap_or((404, "<html><body>Not Found</body></html>".to_string()));
            let reply = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    (base, log)
}

pub fn options() -> AppOptions {
    AppOptions {
        source: SourceOptions::with_sheet_url(PAGE),
        ..AppOptions::default()
    }
}

pub fn via_proxy(url: &str) -> String {
    let src = options().source;
    proxied_url(&src.proxy_url, &src.proxy_param, url).unwrap()
}

/// A `waffle` table in the export's shape, one `<tr>` per row of cell HTML.
pub fn sheet_page(rows: &[&[&str]]) -> String {
    let mut body = String::new();
    for (i, cells) in rows.iter().enumerate() {
        body.push_str(&format!(r#"<tr style="height: 20px"><th id="0R{i}" class="row-headers-background"><div class="row-header-wrapper">{}</div></th>"#, i + 1));
        for c in cells.iter() {
            body.push_str(&format!(r#"<td class="s0" dir="ltr">{c}</td>"#));
        }
        body.push_str("</tr>");
    }
    format!(
        r#"<html><head><title>Catalog</title><script>var x = 1;</script></head><body>
        <div id="sheets-viewport"><div class="grid-container"><table class="waffle" cellspacing="0" cellpadding="0">
        <thead><tr><th class="row-header freezebar-origin-ltr"></th><th class="column-headers-background">A</th></tr></thead>
        <tbody>{body}</tbody></table></div></div></body></html>"#
    )
}

pub const HEADER: &[&str] = &["Fotka", "Nazev", "Popis", "Pobocka", "Kusy"];

pub fn rec(name: &str, description: &str, branch: &str, pieces: &str) -> Record {
    Record {
        image: String::new(),
        name: name.to_string(),
        description: description.to_string(),
        branch: branch.to_string(),
        pieces: pieces.to_string(),
    }
}
