// src/gui/components/mod.rs
pub mod card_grid;
pub mod search_bar;
pub mod status_line;
