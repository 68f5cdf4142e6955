use std::io::stdout;
use std::path::PathBuf;

use aihero_config::Config;
use clap::Parser;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};

mod app;
mod carousel;
mod cursor;
mod form;
mod logging;
mod pages;

use app::App;

/// AI HERO brochure in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, env = "AIHERO_CONFIG")]
    config: Option<PathBuf>,
    /// Page to open first, e.g. `/aloqa`
    #[arg(short, long)]
    route: Option<String>,
    /// Disable the animated background
    #[arg(long)]
    no_background: bool,
    /// Write logs to this file instead of the data directory
    #[arg(long, env = "AIHERO_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}; using defaults");
            tracing::error!(error = %e, "failed to load config");
            Config::default()
        }
    };
    config.apply_env();
    if let Some(route) = args.route {
        config.ui.start_route = route;
    }
    if args.no_background {
        config.ui.background = false;
    }

    let terminal = ratatui::init();
    crossterm::execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    let result = App::new(config).run(terminal);
    if let Err(e) = crossterm::execute!(stdout(), DisableFocusChange, DisableMouseCapture) {
        tracing::warn!(error = %e, "failed to disable mouse and focus reporting");
    }
    ratatui::restore();
    result
}
