// src/gui/mod.rs
pub mod app;
mod actions;
mod progress;
mod screens;

pub use app::run;
