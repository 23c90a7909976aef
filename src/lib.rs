// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod catalog;
pub mod gui;
pub mod pipeline;
pub mod search;
pub mod sheet;
pub mod sink;
