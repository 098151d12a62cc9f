// src/gui/screens/mod.rs
//
// One module per screen; each draws into the central panel and may move
// `app.state.gui.screen` along.

pub mod info;
pub mod options;
pub mod results;
pub mod ticker;
