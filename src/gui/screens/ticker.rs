// src/gui/screens/ticker.rs
use eframe::egui::{self, ProgressBar, widgets::Spinner};

use crate::gui::{actions, app::App, progress};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let status = progress::read(&app.status);
    let cancelling = app.cancel.is_cancelled();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.horizontal(|ui| {
            ui.add(Spinner::new());
            ui.label("Searching in progress. Please wait.");
        });
        ui.add_space(8.0);
        ui.label(status.event.to_string());
        ui.add(
            ProgressBar::new(status.event.fraction())
                .show_percentage()
                .desired_width(320.0),
        );
        ui.weak(&status.line);
        ui.add_space(16.0);

        let label = if cancelling { "Cancelling…" } else { "Cancel" };
        if ui.add_enabled(!cancelling, egui::Button::new(label)).clicked() {
            actions::cancel(app);
        }
    });
}
