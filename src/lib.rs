// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod gui;
pub mod matching;
pub mod page;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;

pub use error::{Error, Result};
