//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Screen, App, AppEvent, Action, Command)
//! - `keys`: Raw key → Action mapping
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `input`, `gauge`: Sub-widget capabilities (text editing, progress bar)
//! - `timer`: One-shot tick scheduling
//! - `run`: Effects (terminal, event loop)

pub mod gauge;
pub mod input;
pub mod keys;
pub mod run;
pub mod state;
pub mod theme;
pub mod timer;
pub mod update;
pub mod view;

pub use run::run;
