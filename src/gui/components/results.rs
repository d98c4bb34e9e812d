// src/gui/components/results.rs
//
// Status line plus the compare results: match table, compact export and
// preview link.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{actions, app::App},
    runner::Tone,
};

fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Info => Color32::GRAY,
        Tone::Busy => Color32::from_rgb(60, 120, 220),
        Tone::Success => Color32::from_rgb(40, 160, 70),
        Tone::Warning => Color32::from_rgb(220, 150, 30),
        Tone::Error => Color32::from_rgb(220, 30, 30),
    }
}

pub fn draw_status(ui: &mut egui::Ui, app: &App) {
    let status = app.status();
    ui.label(RichText::new(status.text).color(tone_color(status.tone)));
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.results();

    if !view.compact.is_empty() {
        ui.horizontal(|ui| {
            ui.label("Export:");
            ui.monospace(&view.compact);
            if ui.button("Copy").clicked() {
                actions::copy(app, ui.ctx());
            }
        });
        ui.hyperlink_to("Open preview", &view.link);
        ui.separator();
    }

    if view.matches.is_empty() || !app.state.prefs.show_matches {
        return;
    }

    ui.label(format!("{} match(es)", view.matches.len()));

    let booth_of = |h: &str| {
        view.booths
            .iter()
            .find(|(m, _)| m == h)
            .map(|(_, b)| b.as_str())
            .unwrap_or("")
    };

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::exact(60.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Handle"); });
            header.col(|ui| { ui.strong("Booth"); });
        })
        .body(|body| {
            body.rows(18.0, view.matches.len(), |mut row| {
                let h = &view.matches[row.index()];
                row.col(|ui| { ui.label(h); });
                row.col(|ui| { ui.monospace(booth_of(h)); });
            });
        });
}
