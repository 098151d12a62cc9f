// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc::{Receiver, TryRecvError}},
};

use eframe::egui;

use crate::{
    config::{
        settings::Settings,
        state::{AppState, Screen},
    },
    error::LookupError,
    lookup::LookupResult,
    progress::CancelFlag,
};

use super::{
    progress::{SharedStatus, Status},
    screens,
};

pub type WorkerReply = Result<Vec<LookupResult>, LookupError>;

pub fn run(native: eframe::NativeOptions, settings: Settings) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Vocab Search",
        native,
        Box::new(|_cc| Ok(Box::new(App::new(settings)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings: Settings,

    // worker shares these
    pub status: SharedStatus,
    pub cancel: CancelFlag,
    pub worker: Option<Receiver<WorkerReply>>,

    /// Last batch-level problem, shown on the options screen.
    pub error: Option<String>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let state = AppState::new(settings.lookup_options());
        logf!(
            "Init: language={} dictionary={} direction={:?}",
            state.options.language,
            state.options.dictionary,
            state.options.direction
        );
        Self {
            state,
            settings,
            status: Arc::new(Mutex::new(Status::default())),
            cancel: CancelFlag::new(),
            worker: None,
            error: None,
        }
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.worker.is_some()
    }

    #[inline]
    pub fn go(&mut self, screen: Screen) {
        logd!("UI: {:?} → {:?}", self.state.gui.screen, screen);
        self.state.gui.screen = screen;
    }

    /// Pick up the worker's answer, if it has one.
    fn poll_worker(&mut self) {
        let Some(rx) = &self.worker else { return };
        let reply = match rx.try_recv() {
            Ok(r) => r,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                loge!("Search: worker vanished without a reply");
                self.worker = None;
                self.error = Some(s!("Search stopped unexpectedly"));
                self.go(Screen::Options);
                return;
            }
        };
        self.worker = None;

        if self.cancel.is_cancelled() {
            logf!("Search: cancelled, results discarded");
            self.cancel.reset();
            self.go(Screen::Options);
            return;
        }

        match reply {
            Ok(results) => {
                logf!("Search: {} result(s) ready", results.len());
                self.state.set_results(results);
                self.go(Screen::Results);
            }
            Err(e) => {
                loge!("Search: {e}");
                self.error = Some(e.to_string());
                self.go(Screen::Options);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::CentralPanel::default().show(ctx, |ui| match self.state.gui.screen {
            Screen::Info => screens::info::draw(ui, self),
            Screen::Options => screens::options::draw(ui, self),
            Screen::Ticker => screens::ticker::draw(ui, self),
            Screen::Results => screens::results::draw(ui, self),
        });
    }
}
