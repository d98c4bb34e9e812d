// src/gui/actions/compare.rs
use eframe::egui;

use crate::gui::{app::App, progress::GuiProgress};

pub fn compare(app: &mut App, ctx: &egui::Context) {
    logf!("UI: Compare set={}", app.state.prefs.sheet_set_index);
    let status = app.status.clone();
    super::spawn_job(app, ctx, "compare", move |cmds, ctx| {
        let mut prog = GuiProgress::new(status, ctx.clone());
        cmds.compare(Some(&mut prog))
    });
}
