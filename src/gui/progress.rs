// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use eframe::egui;

use crate::progress::{CancelFlag, Progress, ProgressEvent, Signal};

/// What the ticker screen shows; written by the worker, read by the UI.
#[derive(Clone, Debug, Default)]
pub struct Status {
    pub event: ProgressEvent,
    pub line: String,
}

pub type SharedStatus = Arc<Mutex<Status>>;

pub fn read(status: &SharedStatus) -> Status {
    status.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

pub struct GuiProgress {
    status: SharedStatus,
    cancel: CancelFlag,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: SharedStatus, cancel: CancelFlag, ctx: egui::Context) -> Self {
        Self { status, cancel, ctx }
    }

    fn update(&self, f: impl FnOnce(&mut Status)) {
        let mut status = self.status.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *status);
        drop(status);
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.update(|s| s.event = ProgressEvent::new(0, total));
    }

    fn log(&mut self, msg: &str) {
        self.update(|s| s.line = s!(msg));
    }

    fn item_done(&mut self, index: usize, total: usize) -> Signal {
        self.update(|s| s.event = ProgressEvent::new(index, total));
        self.cancel.signal()
    }

    fn finish(&mut self) {
        self.update(|s| s.line = s!("Done"));
    }
}
