// src/config/options.rs
use super::consts::*;

/// User preferences. Each field is persisted under its own storage key and
/// falls back to its default independently (see `store::load_preferences`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Pixels scrolled per iteration.
    pub scroll_step: u32,
    /// Wait between iterations, in milliseconds.
    pub delay_ms: u64,
    pub sheet_set_index: usize,
    /// Run a compare as soon as a finished scrape is saved.
    pub auto_compare: bool,
    /// List matched handles, not just the count.
    pub show_matches: bool,
    /// Copy the preview link instead of the bare export code.
    pub copy_link: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            scroll_step: DEFAULT_SCROLL_STEP,
            delay_ms: DEFAULT_DELAY_MS,
            sheet_set_index: 0,
            auto_compare: true,
            show_matches: true,
            copy_link: false,
        }
    }
}

impl Preferences {
    pub fn set_scroll_step(&mut self, px: u32) {
        let (lo, hi) = SCROLL_STEP_RANGE;
        self.scroll_step = px.clamp(lo, hi);
    }

    pub fn set_delay_ms(&mut self, ms: u64) {
        let (lo, hi) = DELAY_RANGE_MS;
        self.delay_ms = ms.clamp(lo, hi);
    }

    /// Re-apply range limits after loading values from disk.
    pub fn clamped(mut self) -> Self {
        self.set_scroll_step(self.scroll_step);
        self.set_delay_ms(self.delay_ms);
        self
    }

    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            scroll_step: self.scroll_step,
            delay_ms: self.delay_ms,
        }
    }
}

/// The two knobs the scroll loop needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub scroll_step: u32,
    pub delay_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Preferences::default().scrape_options()
    }
}
