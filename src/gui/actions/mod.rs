// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Long-running actions run on a worker thread and report back through
// `App::status` / `App::results`.

mod compare;
mod copy;
mod scrape;
mod settings;

pub use compare::compare;
pub use copy::copy;
pub use scrape::{scrape, stop};
pub use settings::{clear_handles, reset_preferences};

use std::sync::{atomic::Ordering, Arc};
use std::thread;

use eframe::egui;

use crate::{
    gui::app::{lock, App, ResultsView},
    runner::{Commands, Outcome},
};

/// Run `job` off the UI thread, publishing its outcome when done.
/// Does nothing if another job is still active.
pub(super) fn spawn_job<F>(app: &App, ctx: &egui::Context, name: &'static str, job: F)
where
    F: FnOnce(&Commands, &egui::Context) -> Outcome + Send + 'static,
{
    if app.busy.swap(true, Ordering::AcqRel) {
        logd!("UI: {name} ignored, worker busy");
        return;
    }

    let cmds = Arc::clone(&app.cmds);
    let status = Arc::clone(&app.status);
    let results = Arc::clone(&app.results);
    let busy = Arc::clone(&app.busy);
    let ctx = ctx.clone();

    thread::spawn(move || {
        let outcome = job(&cmds, &ctx);
        logf!("UI: {name} finished: {}", outcome.status().text);

        if let Some(view) = ResultsView::from_outcome(&outcome) {
            *lock(&results) = view;
        }
        *lock(&status) = outcome.status();
        busy.store(false, Ordering::Release);
        ctx.request_repaint();
    });
}

/// Show an immediate (UI-thread) outcome.
pub(super) fn publish(app: &App, outcome: &Outcome) {
    if let Some(view) = ResultsView::from_outcome(outcome) {
        *lock(&app.results) = view;
    }
    app.set_status(outcome.status());
}
