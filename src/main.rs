//! tui-showcase CLI
//!
//! Full-screen terminal demo: menu, animated progress, live search, help.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use tui_showcase::config::Config;
use tui_showcase::logging::init_logging;
use tui_showcase::tui;

#[derive(Parser)]
#[command(name = "tui-showcase")]
#[command(about = "Multi-screen terminal UI demo")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();

    let config = Config::default();
    init_logging(&config.log_filter);
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    match tui::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "terminal runtime failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
