// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod entry;
pub mod gui;
pub mod lookup;
pub mod pager;
pub mod pair;
pub mod progress;
pub mod sites;
