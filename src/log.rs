// src/log.rs
//
// Diagnostic log. Lines go to a file, never to the UI.
// Failures to open or write are swallowed: logging must not change control flow.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Severity tag written into each line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info  => "INFO",
            Level::Warn  => "WARN",
            Level::Error => "ERROR",
        }
    }
}

pub fn format_line(elapsed_ms: u128, level: Level, msg: &str) -> String {
    format!("[{}][{}] {msg}\n", fmt_elapsed(elapsed_ms), level.tag())
}

pub fn write_log(level: Level, msg: &str) {
    let line = format_line(start().elapsed().as_millis(), level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Some(parent) = Path::new(LOG_FILE).parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
