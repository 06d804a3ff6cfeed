//! tui-showcase: a four-screen terminal UI demo.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod tui;
