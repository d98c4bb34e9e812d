// src/runner.rs
//
// The user-facing commands: start/stop scrape, compare, clear, reset.
// Every command ends in an `Outcome`, and every outcome has exactly one
// status line. Failures are turned into outcomes here; nothing propagates
// past this layer.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::{
    config::{consts::*, options::Preferences, sheets::SheetConfig},
    core::net,
    error::{Error, Result},
    matching::{find_matches, CompareReport},
    page::Page,
    progress::Progress,
    scrape::{scrape, ScrapeOutcome, ScrapeSession},
    specs::sheets::{parse_booth_sheet, parse_handle_sheet},
    store::{self, KvStore},
};

/// Status colour class; frontends decide what each looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone { Info, Busy, Success, Warning, Error }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub text: String,
}

impl Status {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self { tone, text: text.into() }
    }

    pub fn idle() -> Self {
        Self::new(Tone::Info, "Idle")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetKind { Handles, Booths }

#[derive(Debug)]
pub enum Outcome {
    Scraped { count: usize },
    /// The run was cancelled; nothing was saved.
    Stopped { partial: usize },
    StopRequested { was_running: bool },
    Rejected(Error),
    Compared(CompareReport),
    NoStoredHandles,
    NoMatches,
    /// Matches exist but none resolved to a usable booth code.
    NoBoothMappings { matches: Vec<String>, skipped: usize },
    FetchFailed { sheet: SheetKind, reason: String, matches: Vec<String> },
    Cleared,
    PrefsReset(Preferences),
}

impl Outcome {
    pub fn status(&self) -> Status {
        use Outcome::*;
        match self {
            Scraped { count } => Status::new(Tone::Success, format!("Collected {count} handles.")),
            Stopped { .. } => Status::new(Tone::Warning, "Stopped."),
            StopRequested { was_running: true } => Status::new(Tone::Warning, "Stopping…"),
            StopRequested { was_running: false } => Status::new(Tone::Info, "Nothing to stop."),
            Rejected(Error::InvalidContext { .. }) => Status::new(
                Tone::Error,
                "Collection disabled. Navigate to your following page.",
            ),
            Rejected(Error::AlreadyRunning) => {
                Status::new(Tone::Warning, "Scraper is running. Press stop to cancel.")
            }
            Rejected(e) => Status::new(Tone::Error, format!("Error: {e}")),
            Compared(r) => {
                let mut text = format!("{} match(es) found, {} with booths.", r.matches.len(), r.booths.len());
                if r.skipped > 0 {
                    text.push_str(&format!(" {} unreadable booth code(s) skipped.", r.skipped));
                }
                Status::new(Tone::Success, text)
            }
            NoStoredHandles => Status::new(Tone::Warning, "No stored handles found."),
            NoMatches => Status::new(Tone::Info, "No matching handles found."),
            NoBoothMappings { matches, .. } => Status::new(
                Tone::Info,
                format!("{} match(es) found, but no booth codes for them.", matches.len()),
            ),
            FetchFailed { sheet: SheetKind::Handles, .. } => {
                Status::new(Tone::Error, "Failed to fetch sheet.")
            }
            FetchFailed { sheet: SheetKind::Booths, matches, .. } => Status::new(
                Tone::Error,
                format!("{} match(es) found, but the booth sheet failed to load.", matches.len()),
            ),
            Cleared => Status::new(Tone::Info, "Stored followings cleared."),
            PrefsReset(_) => Status::new(Tone::Info, "Preferences reset."),
        }
    }
}

type Fetcher = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Owns the store, the cached sheet config, and the scrape session.
/// Methods take `&self` so one `Arc<Commands>` can serve a worker thread
/// (scraping) and the UI thread (stop, settings) at once.
pub struct Commands {
    store: Mutex<KvStore>,
    config_path: PathBuf,
    config: OnceLock<SheetConfig>,
    session: Arc<ScrapeSession>,
    fetch: Fetcher,
}

impl Commands {
    pub fn new(store_dir: &Path, config_path: &Path) -> Self {
        Self {
            store: Mutex::new(KvStore::open_in(store_dir)),
            config_path: config_path.to_path_buf(),
            config: OnceLock::new(),
            session: Arc::new(ScrapeSession::new()),
            fetch: Box::new(|url: &str| net::http_get(url)),
        }
    }

    /// Default locations: `.store/` and `config.json` in the working dir.
    pub fn with_defaults() -> Self {
        Self::new(Path::new(STORE_DIR), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Use an already loaded config instead of reading `config_path`.
    pub fn with_config(self, cfg: SheetConfig) -> Self {
        let _ = self.config.set(cfg);
        self
    }

    /// Replace the HTTP GET used for the sheets.
    pub fn with_fetcher<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        self.fetch = Box::new(f);
        self
    }

    pub fn session(&self) -> Arc<ScrapeSession> {
        Arc::clone(&self.session)
    }

    fn store(&self) -> MutexGuard<'_, KvStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Loaded on first use, then kept for the session.
    pub fn config(&self) -> Result<&SheetConfig> {
        if let Some(cfg) = self.config.get() {
            return Ok(cfg);
        }
        let cfg = SheetConfig::load(&self.config_path)?;
        Ok(self.config.get_or_init(|| cfg))
    }

    /* ---------------- Preferences ---------------- */

    pub fn preferences(&self) -> Preferences {
        store::load_preferences(&self.store())
    }

    pub fn set_preferences(&self, prefs: &Preferences) -> Result<()> {
        store::save_preferences(&mut self.store(), prefs)
    }

    pub fn reset_preferences(&self) -> Outcome {
        match store::reset_preferences(&mut self.store()) {
            Ok(p) => {
                logf!("Store: Preferences reset");
                Outcome::PrefsReset(p)
            }
            Err(e) => Outcome::Rejected(e),
        }
    }

    /* ---------------- Handles ---------------- */

    pub fn stored_handles(&self) -> Vec<String> {
        store::load_handles(&self.store())
    }

    pub fn clear_handles(&self) -> Outcome {
        match store::clear_handles(&mut self.store()) {
            Ok(()) => {
                logf!("Store: Cleared stored handles");
                Outcome::Cleared
            }
            Err(e) => Outcome::Rejected(e),
        }
    }

    /* ---------------- Scrape ---------------- */

    /// Run a scrape to completion on this thread. On success the handles
    /// are saved and `progress.saved()` fires; whether to compare next is
    /// up to the caller (see `Preferences::auto_compare`).
    pub fn start_scrape(&self, page: &mut dyn Page, mut progress: Option<&mut dyn Progress>) -> Outcome {
        let opts = self.preferences().scrape_options();

        let outcome = match scrape(page, opts, &self.session, progress.as_deref_mut()) {
            Ok(o) => o,
            Err(e) => {
                logf!("Scrape: Rejected: {e}");
                return Outcome::Rejected(e);
            }
        };

        match outcome {
            ScrapeOutcome::Cancelled { partial } => Outcome::Stopped { partial },
            ScrapeOutcome::Completed(handles) => {
                let list = handles.to_strings();
                if let Err(e) = store::save_handles(&mut self.store(), &list) {
                    loge!("Store: Save failed: {e}");
                    return Outcome::Rejected(e);
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.saved();
                }
                Outcome::Scraped { count: list.len() }
            }
        }
    }

    pub fn stop_scrape(&self) -> Outcome {
        let was_running = self.session.is_running();
        self.session.request_stop();
        logf!("Scrape: Stop requested (running={was_running})");
        Outcome::StopRequested { was_running }
    }

    /* ---------------- Compare ---------------- */

    pub fn compare(&self, mut progress: Option<&mut dyn Progress>) -> Outcome {
        let stored = self.stored_handles();
        if stored.is_empty() {
            return Outcome::NoStoredHandles;
        }

        let cfg = match self.config() {
            Ok(c) => c,
            Err(e) => return Outcome::Rejected(e),
        };
        let set = match cfg.set(self.preferences().sheet_set_index) {
            Ok(s) => s,
            Err(e) => return Outcome::Rejected(e),
        };

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}…", set.name));
        }
        let published = match (self.fetch)(&set.handles_url) {
            Ok(text) => parse_handle_sheet(&text),
            Err(e) => {
                loge!("Compare: Handle sheet: {e}");
                return Outcome::FetchFailed { sheet: SheetKind::Handles, reason: e.to_string(), matches: Vec::new() };
            }
        };

        let matches = find_matches(&stored, &published);
        logf!("Compare: {} stored, {} published, {} matched", stored.len(), published.len(), matches.len());
        if matches.is_empty() {
            return Outcome::NoMatches;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.log("Fetching booths…");
        }
        let mapping = match (self.fetch)(&set.booths_url) {
            Ok(text) => parse_booth_sheet(&text),
            Err(e) => {
                loge!("Compare: Booth sheet: {e}");
                return Outcome::FetchFailed { sheet: SheetKind::Booths, reason: e.to_string(), matches };
            }
        };

        let report = CompareReport::build(matches, &mapping, &cfg.preview_base, &set.slug());
        if report.booths.is_empty() {
            return Outcome::NoBoothMappings { skipped: report.skipped, matches: report.matches };
        }
        logf!("Compare: Export {} ({} booth(s), {} skipped)", report.compact, report.booths.len(), report.skipped);
        Outcome::Compared(report)
    }
}
