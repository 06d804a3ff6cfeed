//! Errors from the terminal runtime.
//!
//! The state machine itself is total; only terminal setup, drawing,
//! event reading and teardown can fail.

use std::io;

use thiserror::Error;

/// Failure of the terminal runtime.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Raw mode or the alternate screen could not be entered.
    #[error("failed to initialize terminal: {0}")]
    TerminalSetup(#[source] io::Error),

    /// A frame could not be drawn.
    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),

    /// Polling or reading terminal input failed.
    #[error("failed to read terminal event: {0}")]
    EventRead(#[source] io::Error),

    /// Raw mode or the alternate screen could not be left.
    #[error("failed to restore terminal: {0}")]
    TerminalRestore(#[source] io::Error),
}
