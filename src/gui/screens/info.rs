// src/gui/screens/info.rs
use eframe::egui;

use crate::{config::state::Screen, gui::app::App};

const ABOUT: &str = "\
Paste a list of words or phrases, one per line, pick a language and a \
dictionary, and every term is looked up in turn.

WordReference covers most European languages plus Turkish, Korean and \
Arabic. Chinese goes to MDBG, Arabic can also use ArabDict, and Hebrew \
uses Morfix.

Lookups run one at a time and can be cancelled between terms.";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Vocab Search");
        ui.add_space(12.0);
    });

    ui.label(ABOUT);
    ui.add_space(16.0);

    ui.vertical_centered(|ui| {
        if ui.button("Start").clicked() {
            app.go(Screen::Options);
        }
    });
}
