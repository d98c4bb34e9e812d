// src/gui/actions/settings.rs
use crate::{gui::app::App, runner::Outcome};

pub fn clear_handles(app: &mut App) {
    let outcome = app.cmds.clear_handles();
    super::publish(app, &outcome);
}

pub fn reset_preferences(app: &mut App) {
    let outcome = app.cmds.reset_preferences();
    if let Outcome::PrefsReset(p) = &outcome {
        app.state.prefs = p.clone();
        logf!("UI: Preferences reset → {:?}", app.state.prefs);
    }
    super::publish(app, &outcome);
}
