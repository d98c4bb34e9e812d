// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    progress::Progress,
    runner::{Status, Tone},
};
use super::app::lock;

pub struct GuiProgress {
    status: Arc<Mutex<Status>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<Status>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }

    fn set_status(&self, tone: Tone, msg: impl Into<String>) {
        *lock(&self.status) = Status::new(tone, msg);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self) {
        self.set_status(Tone::Busy, "Scraper running...");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(Tone::Busy, msg);
    }
    fn iteration(&mut self, n: u32, total: usize) {
        self.set_status(
            Tone::Busy,
            format!("Scrolling ({n}), {total} handle(s). Do NOT touch the page."),
        );
    }
    fn complete(&mut self, count: usize) {
        self.set_status(Tone::Success, format!("Collected {count} handles."));
    }
    fn saved(&mut self) {
        logd!("UI: Handles saved");
    }
}
