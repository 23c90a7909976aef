// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::sheet::{ColumnLayout, SentinelHeader};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub extract: ExtractOptions,
}

/// Where the sheet lives and how to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub sheet_url: String,
    /// Relay endpoint; the target goes into `?{proxy_param}=<encoded>`.
    pub proxy_url: String,
    pub proxy_param: String,
    /// Appended to `sheet_url` when the published page has no data table.
    pub inner_suffix: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            sheet_url: s!(SHEET_URL),
            proxy_url: s!(PROXY_URL),
            proxy_param: s!(PROXY_PARAM),
            inner_suffix: s!(INNER_SHEET_SUFFIX),
            timeout: Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl SourceOptions {
    pub fn with_sheet_url(url: impl Into<String>) -> Self {
        Self { sheet_url: url.into(), ..Self::default() }
    }

    /// URL shapes to probe for the data table, in order.
    pub fn url_shapes(&self) -> Vec<String> {
        vec![
            self.sheet_url.clone(),
            format!("{}{}", self.sheet_url, self.inner_suffix),
        ]
    }
}

/// How to find and read the table once fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub table_class: String,
    pub header: SentinelHeader,
    pub layout: ColumnLayout,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            table_class: s!(TABLE_CLASS),
            header: SentinelHeader::new(HEADER_SENTINEL),
            layout: ColumnLayout::default(),
        }
    }
}
