// src/config/consts.rs

// Source
pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSu50osqROnaSgf6c6cM6O83Bz_0OMFBZqadVX3Sb8BfoUfCTo8nwHy-9hAJYUnCdvNOfylKUa-pIu5/pubhtml";
pub const PROXY_URL: &str = "https://api.allorigins.win/raw";
pub const PROXY_PARAM: &str = "url";
pub const INNER_SHEET_SUFFIX: &str = "/sheet?headers=false&gid=0";

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
pub const USER_AGENT: &str = concat!("sheet_catalog/", env!("CARGO_PKG_VERSION"));

// Sheet layout
pub const TABLE_CLASS: &str = "waffle";
pub const HEADER_SENTINEL: &str = "fotka"; // header label of the image column
pub const COL_IMAGE: usize = 0;
pub const COL_NAME: usize = 1;
pub const COL_DESCRIPTION: usize = 2;
pub const COL_BRANCH: usize = 3;
pub const COL_PIECES: usize = 4;

// Diagnostics
pub const LOG_FILE: &str = ".store/debug.log";

// UI text
pub const MSG_LOAD_FAILED: &str = "Failed to load data. Make sure the sheet is published to the web.";
pub const MSG_NO_RESULTS: &str = "No items found.";
pub const MSG_NO_IMAGE: &str = "No image";
pub const MSG_UNTITLED: &str = "Untitled";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
pub const CARD_W: f32 = 240.0;
pub const CARD_IMAGE_H: f32 = 160.0;
