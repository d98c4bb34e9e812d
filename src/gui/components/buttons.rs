// src/gui/components/buttons.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let scraping = app.scraping();
    let busy = app.is_busy();

    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 160, 70);
        let start = ui.add_enabled(
            !scraping && !busy,
            egui::Button::new(egui::RichText::new("START").color(egui::Color32::WHITE).strong())
                .fill(green),
        );
        if start.clicked() {
            actions::scrape(app, ui.ctx());
        }

        if ui.add_enabled(scraping, egui::Button::new("Stop")).clicked() {
            actions::stop(app);
        }

        if ui.add_enabled(!busy, egui::Button::new("Compare")).clicked() {
            actions::compare(app, ui.ctx());
        }
    });

    ui.horizontal(|ui| {
        if ui.add_enabled(!scraping, egui::Button::new("Clear stored"))
            .on_hover_text("Forget the collected handles")
            .clicked()
        {
            actions::clear_handles(app);
        }
        if ui.add_enabled(!scraping, egui::Button::new("Reset preferences")).clicked() {
            actions::reset_preferences(app);
        }
        if busy {
            ui.add(egui::widgets::Spinner::new());
        }
    });
}
