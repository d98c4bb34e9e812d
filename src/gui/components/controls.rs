// src/gui/components/controls.rs
//
// Scrape settings and page source. Every preference change is saved
// immediately.

use eframe::egui::{self, Slider};

use crate::{
    config::consts::{DELAY_RANGE_MS, SCROLL_STEP_RANGE},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before = app.state.prefs.clone();
    let locked = app.scraping();

    ui.add_enabled_ui(!locked, |ui| {
        let prefs = &mut app.state.prefs;

        ui.horizontal(|ui| {
            ui.label("Scroll step (px):");
            let (lo, hi) = SCROLL_STEP_RANGE;
            ui.add(Slider::new(&mut prefs.scroll_step, lo..=hi).step_by(50.0));
        });
        ui.horizontal(|ui| {
            ui.label("Delay (ms):");
            let (lo, hi) = DELAY_RANGE_MS;
            ui.add(Slider::new(&mut prefs.delay_ms, lo..=hi).step_by(50.0));
        });
    });

    {
        let prefs = &mut app.state.prefs;
        let selected = app
            .sheet_names
            .get(prefs.sheet_set_index)
            .or_else(|| app.sheet_names.first())
            .cloned()
            .unwrap_or_else(|| s!("(no sheet sets)"));

        ui.horizontal(|ui| {
            ui.label("Sheet set:");
            egui::ComboBox::from_id_salt("sheet_set")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (i, name) in app.sheet_names.iter().enumerate() {
                        ui.selectable_value(&mut prefs.sheet_set_index, i, name);
                    }
                });
        });

        ui.checkbox(&mut prefs.auto_compare, "Compare after collecting")
            .on_hover_text("Run the compare as soon as a scrape is saved");
        ui.checkbox(&mut prefs.show_matches, "Show matched handles");
        ui.checkbox(&mut prefs.copy_link, "Copy preview link instead of code");
    }

    if app.state.prefs != before {
        logf!("UI: Preferences → {:?}", app.state.prefs);
        app.save_prefs();
    }

    ui.separator();

    ui.add_enabled_ui(!locked, |ui| {
        let gui = &mut app.state.gui;
        ui.horizontal(|ui| {
            ui.label("Saved page:");
            ui.add(egui::TextEdit::singleline(&mut gui.html_path)
                .hint_text("following.html")
                .font(egui::TextStyle::Monospace));
        });
        ui.horizontal(|ui| {
            ui.label("Page URL:");
            ui.add(egui::TextEdit::singleline(&mut gui.page_url)
                .hint_text("from the page if empty")
                .font(egui::TextStyle::Monospace));
        });
    });
}
