// src/core/net.rs
//
// HTTPS GET with a one-shot relay fallback.
// A fetch is an ordered list of attempts: direct first, then through the proxy.

use reqwest::Url;
use reqwest::blocking::Client;

use crate::config::options::SourceOptions;
use crate::error::NetError;

/// Something that can GET a URL and hand back the body as text.
pub trait Transport {
    fn get_text(&self, url: &str) -> Result<String, NetError>;
}

/// Real transport over `reqwest::blocking`.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(src: &SourceOptions) -> Result<Self, NetError> {
        let mut builder = Client::builder().user_agent(src.user_agent.clone());
        if let Some(t) = src.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(|e| NetError::Request {
            url: s!("<client>"),
            reason: e.to_string(),
        })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String, NetError> {
        let request_err = |e: reqwest::Error| NetError::Request { url: s!(url), reason: e.to_string() };

        let resp = self.client.get(url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            // error pages still have a body; the locator decides what it holds
            logw!("Net: HTTP {} from {url}", status.as_u16());
        }
        resp.text().map_err(request_err)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Direct,
    Proxy,
}

/// One `(route, target)` pair in a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt<'a> {
    pub route: Route,
    pub target: &'a str,
}

impl Attempt<'_> {
    /// The URL actually requested for this attempt.
    pub fn url(&self, src: &SourceOptions) -> Result<String, NetError> {
        match self.route {
            Route::Direct => Ok(s!(self.target)),
            Route::Proxy => proxied_url(&src.proxy_url, &src.proxy_param, self.target),
        }
    }
}

pub fn attempts(target: &str) -> [Attempt<'_>; 2] {
    [
        Attempt { route: Route::Direct, target },
        Attempt { route: Route::Proxy, target },
    ]
}

/// `proxy?param=<target, percent-encoded>`
pub fn proxied_url(proxy: &str, param: &str, target: &str) -> Result<String, NetError> {
    Url::parse_with_params(proxy, &[(param, target)])
        .map(String::from)
        .map_err(|e| NetError::BadUrl { url: s!(proxy), reason: e.to_string() })
}

/// GET `target`, falling back once to the proxy. Returns the last error if both fail.
pub fn fetch_text(transport: &dyn Transport, target: &str, src: &SourceOptions) -> Result<String, NetError> {
    let mut last_err: Option<NetError> = None;

    for attempt in attempts(target) {
        if let Some(prev) = &last_err {
            logw!("Net: {:?} fetch failed ({prev}); falling back to {:?}", Route::Direct, attempt.route);
        }

        let result = attempt.url(src).and_then(|url| {
            logd!("Net: GET {url} ({:?})", attempt.route);
            transport.get_text(&url)
        });

        match result {
            Ok(body) => {
                logd!("Net: {:?} OK, {} bytes", attempt.route, body.len());
                return Ok(body);
            }
            Err(e) => last_err = Some(e),
        }
    }

    let err = last_err.unwrap_or_else(|| NetError::Request { url: s!(target), reason: s!("no attempts") });
    loge!("Net: all attempts failed for {target}: {err}");
    Err(err)
}
