// src/gui/actions/search.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::state::Screen,
    gui::{
        app::App,
        progress::{GuiProgress, Status},
    },
    lookup::{self, parse_terms},
};

/// Kick off the batch on a worker thread and switch to the ticker.
pub fn search(app: &mut App, ctx: &egui::Context) {
    if app.running() {
        return;
    }

    let terms = parse_terms(&app.state.gui.input);
    if terms.is_empty() {
        app.error = Some(s!("Enter at least one term, one per line"));
        return;
    }
    if let Err(e) = app.state.options.validate() {
        app.error = Some(e.to_string());
        return;
    }

    app.error = None;
    app.cancel.reset();
    *app.status.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Status::default();

    let options = app.state.options.clone();
    let settings = app.settings.clone();
    let mut progress = GuiProgress::new(app.status.clone(), app.cancel.clone(), ctx.clone());
    let (tx, rx) = mpsc::channel();

    logf!("Search: Begin terms={} options={:?}", terms.len(), options);

    thread::spawn(move || {
        // → This is where the lookups happen ←
        let reply = settings
            .fetcher()
            .and_then(|fetcher| lookup::lookup_all(&terms, &options, &fetcher, &mut progress));
        // The UI may have gone away; nothing to do then.
        let _ = tx.send(reply);
    });

    app.worker = Some(rx);
    app.go(Screen::Ticker);
}

/// Ask the worker to stop after the current term.
pub fn cancel(app: &mut App) {
    logf!("Search: cancel requested");
    app.cancel.cancel();
}
