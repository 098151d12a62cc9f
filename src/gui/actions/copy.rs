// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

/// Current result block → clipboard.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(result) = app.state.current() else {
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };
    logf!("Copy: term={:?} ({})", result.term, app.state.pager.label());
    ui_ctx.copy_text(result.to_string());
}
