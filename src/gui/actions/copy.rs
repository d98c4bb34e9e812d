// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    gui::app::App,
    runner::{Status, Tone},
};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let view = app.results();
    if view.compact.is_empty() {
        app.set_status(Status::new(Tone::Info, "Nothing to copy"));
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = if app.state.prefs.copy_link { view.link } else { view.compact };
    logf!("Copy: {} chars (link={})", txt.len(), app.state.prefs.copy_link);

    ui_ctx.copy_text(txt);
    app.set_status(Status::new(Tone::Success, "Copied to clipboard"));
}
