// src/config/state.rs
use super::options::LookupOptions;
use crate::lookup::LookupResult;
use crate::pager::Pager;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Info,
    Options,
    Ticker,
    Results,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    pub screen: Screen,

    /// Raw text of the term box, one term per line.
    pub input: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 640,
            screen: Screen::Info,
            input: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: LookupOptions,
    pub gui: GuiState,

    pub results: Vec<LookupResult>,
    pub pager: Pager,
}

impl AppState {
    pub fn new(options: LookupOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn set_results(&mut self, results: Vec<LookupResult>) {
        self.pager = Pager::new(results.len());
        self.results = results;
    }

    pub fn current(&self) -> Option<&LookupResult> {
        self.results.get(self.pager.index())
    }

    /// Back to the options screen, keeping the typed terms.
    pub fn new_search(&mut self) {
        self.set_results(Vec::new());
        self.gui.screen = Screen::Options;
    }
}
