// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

use eframe::egui;

use crate::{
    config::state::{AppState, GuiState},
    matching::CompareReport,
    runner::{Commands, Outcome, Status, Tone},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Booth Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(Commands::with_defaults())))),
    )?;
    Ok(())
}

/// What the results panel shows after a compare.
#[derive(Clone, Debug, Default)]
pub struct ResultsView {
    pub matches: Vec<String>,
    pub booths: Vec<(String, String)>,
    pub compact: String,
    pub link: String,
}

impl ResultsView {
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::Compared(CompareReport { matches, booths, compact, link, .. }) => Some(Self {
                matches: matches.clone(),
                booths: booths.clone(),
                compact: compact.clone(),
                link: link.clone(),
            }),
            Outcome::NoBoothMappings { matches, .. } | Outcome::FetchFailed { matches, .. } => Some(Self {
                matches: matches.clone(),
                ..Self::default()
            }),
            Outcome::NoMatches | Outcome::NoStoredHandles | Outcome::Cleared => Some(Self::default()),
            _ => None,
        }
    }
}

pub struct App {
    // single source of truth for widgets (UI thread only)
    pub state: AppState,

    pub cmds: Arc<Commands>,
    pub sheet_names: Vec<String>,

    // workers write here
    pub status: Arc<Mutex<Status>>,
    pub results: Arc<Mutex<ResultsView>>,
    /// A worker thread (scrape or compare) is active.
    pub busy: Arc<AtomicBool>,
}

impl App {
    pub fn new(cmds: Commands) -> Self {
        let mut status = Status::idle();

        let sheet_names = match cmds.config() {
            Ok(cfg) => cfg.sheet_sets.iter().map(|s| s.name.clone()).collect(),
            Err(e) => {
                loge!("Config: {e}");
                status = Status::new(Tone::Warning, format!("No sheet sets: {e}"));
                Vec::new()
            }
        };

        let state = AppState { prefs: cmds.preferences(), gui: GuiState::default() };

        let stored = cmds.stored_handles().len();
        if stored > 0 && status.tone == Tone::Info {
            status = Status::new(Tone::Info, format!("{stored} stored handle(s)."));
        }
        logf!("Init: stored={stored}, sheet sets={}", sheet_names.len());

        Self {
            state,
            cmds: Arc::new(cmds),
            sheet_names,
            status: Arc::new(Mutex::new(status)),
            results: Arc::new(Mutex::new(ResultsView::default())),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    #[inline]
    pub fn scraping(&self) -> bool {
        self.cmds.session().is_running()
    }

    #[inline]
    pub fn set_status(&self, status: Status) {
        *lock(&self.status) = status;
    }

    pub fn status(&self) -> Status {
        lock(&self.status).clone()
    }

    pub fn results(&self) -> ResultsView {
        lock(&self.results).clone()
    }

    /// Persist the widget preferences; failures only reach the log.
    pub fn save_prefs(&self) {
        if let Err(e) = self.cmds.set_preferences(&self.state.prefs) {
            loge!("Store: Saving preferences failed: {e}");
        }
    }
}

/// Poison-tolerant lock; a panicked worker must not take the UI down.
pub fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::results::draw_status(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::controls::draw(ui, self);

            ui.separator();

            crate::gui::components::buttons::draw(ui, self);

            ui.separator();

            crate::gui::components::results::draw(ui, self);
        });
    }
}
