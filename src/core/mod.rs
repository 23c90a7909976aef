// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

#[cfg(test)]
pub(crate) mod testing;
