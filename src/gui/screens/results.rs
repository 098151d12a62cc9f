// src/gui/screens/results.rs
//
// Pager row, the current result block, and an overview table of every term.
// Clicking a row in the table jumps the pager there.

use eframe::egui::{self, Sense, TextEdit, ViewportCommand};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};

const OVERVIEW_HEIGHT: f32 = 160.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("◀ Previous").clicked() {
            app.state.pager.prev();
        }
        ui.label(app.state.pager.label());
        if ui.button("Next ▶").clicked() {
            app.state.pager.next();
        }

        ui.separator();
        if let Some(r) = app.state.current() {
            ui.strong(&r.term);
        }
    });
    ui.separator();

    let text = app.state.current().map(|r| r.to_string()).unwrap_or_default();
    let text_height = (ui.available_height() - OVERVIEW_HEIGHT - 48.0).max(120.0);
    egui::ScrollArea::vertical()
        .id_salt("result_text")
        .max_height(text_height)
        .show(ui, |ui| {
            // &str is a read-only buffer: selectable, not editable
            ui.add(
                TextEdit::multiline(&mut text.as_str())
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );
        });

    ui.separator();
    overview(ui, app);
    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("New Search").clicked() {
            logf!("UI: New search");
            app.state.new_search();
        }
        if ui.button("Exit").clicked() {
            ui.ctx().send_viewport_cmd(ViewportCommand::Close);
        }
    });
}

fn overview(ui: &mut egui::Ui, app: &mut App) {
    let current = app.state.pager.index();
    let mut clicked = None;

    ui.push_id("overview", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .sense(Sense::click())
            .max_scroll_height(OVERVIEW_HEIGHT)
            .column(Column::auto().at_least(32.0))
            .column(Column::remainder().at_least(120.0))
            .column(Column::auto().at_least(90.0))
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong("#"); });
                header.col(|ui| { ui.strong("Term"); });
                header.col(|ui| { ui.strong("Result"); });
            })
            .body(|body| {
                body.rows(18.0, app.state.results.len(), |mut row| {
                    let i = row.index();
                    let r = &app.state.results[i];
                    row.set_selected(i == current);
                    row.col(|ui| { ui.label((i + 1).to_string()); });
                    row.col(|ui| { ui.label(&r.term); });
                    row.col(|ui| { ui.label(r.summary()); });
                    if row.response().clicked() {
                        clicked = Some(i);
                    }
                });
            });
    });

    if let Some(i) = clicked {
        app.state.pager.go_to(i);
    }
}
