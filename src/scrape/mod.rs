// src/scrape/mod.rs
mod scroller;
mod session;

pub use scroller::{scrape, ScrapeOutcome, ScrollLoop, Step, StopReason};
pub use session::{RunGuard, ScrapeSession};
