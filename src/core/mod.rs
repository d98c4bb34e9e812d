// src/core/mod.rs

pub mod handle;
pub mod html;
pub mod net;
pub mod sanitize;

pub use handle::{Handle, HandleSet};
