// src/config/state.rs
use super::options::Preferences;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Captured following-page HTML to scrape.
    pub html_path: String,
    /// Page URL; empty means "read the canonical link from the snapshot".
    pub page_url: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            html_path: s!(),
            page_url: s!(),
            window_w: 420,
            window_h: 640,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub prefs: Preferences,
    pub gui: GuiState,
}
