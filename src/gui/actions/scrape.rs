// src/gui/actions/scrape.rs
use std::path::Path;

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    page::HtmlPage,
    runner::{Outcome, Status, Tone},
};

pub fn scrape(app: &mut App, ctx: &egui::Context) {
    let html = app.state.gui.html_path.trim().to_string();
    if html.is_empty() {
        app.set_status(Status::new(Tone::Warning, "Choose a saved following page first."));
        return;
    }
    if app.scraping() {
        app.set_status(Status::new(Tone::Warning, "Scraper is running. Press stop to cancel."));
        return;
    }

    let url = app.state.gui.page_url.trim().to_string();
    let auto_compare = app.state.prefs.auto_compare;
    let status = app.status.clone();

    logf!("UI: Scrape html={html} url={url:?} auto_compare={auto_compare}");

    super::spawn_job(app, ctx, "scrape", move |cmds, ctx| {
        let url = if url.is_empty() { None } else { Some(url.as_str()) };
        let mut page = match HtmlPage::open(Path::new(&html), url) {
            Ok(p) => p,
            Err(e) => return Outcome::Rejected(e),
        };

        let mut prog = GuiProgress::new(status, ctx.clone());
        let outcome = cmds.start_scrape(&mut page, Some(&mut prog));

        // a saved scrape chains straight into a compare
        if auto_compare && matches!(outcome, Outcome::Scraped { .. }) {
            return cmds.compare(Some(&mut prog));
        }
        outcome
    });
}

pub fn stop(app: &mut App) {
    let outcome = app.cmds.stop_scrape();
    app.set_status(outcome.status());
}
