// src/gui/components/mod.rs
pub mod buttons;
pub mod controls;
pub mod results;
