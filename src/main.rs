//! Main entry point for the chef scene.
//!
//! Parses the command line, loads settings, takes over the terminal and runs
//! the scene actor on an actix system until Esc, Ctrl-C or a termination signal.
//! Logs go to stderr; redirect it (`2>scene.log`) to keep them off the screen.

use std::path::PathBuf;

use actix::{Actor, System};
use clap::Parser;
use log::{info, warn};

use crate::config::settings::{RunMode, SceneSettings};
use crate::error::SceneError;
use crate::frontend::continuous::ContinuousScene;
use crate::frontend::discrete::DiscreteScene;
use crate::frontend::events::spawn_input_reader;
use crate::frontend::terminal::{self, TerminalGuard, TerminalSurface};

pub mod config;
mod error;
mod frontend;
mod game;
#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "chef-scene", about = "Walk a chef around a terminal scene with w/a/s/d")]
struct Cli {
    /// How movement is driven.
    #[arg(long, value_enum)]
    mode: Option<RunMode>,

    /// JSON settings file; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective settings as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), SceneError> {
    // Initialize logger from environment variable.
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = match &cli.config {
        Some(path) => SceneSettings::load(path)?,
        None => SceneSettings::default(),
    };
    if let Some(mode) = cli.mode {
        settings.mode = mode;
    }
    settings.validate()?;

    if cli.print_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let guard = TerminalGuard::enter()?;
    let mode = settings.mode.resolve(guard.reports_key_releases());
    if mode == RunMode::Continuous && !guard.reports_key_releases() {
        warn!("[Main] Terminal does not report key releases; held keys may stick");
    }
    let viewport = terminal::viewport()?;
    info!("[Main] Running in {:?} mode on {:?}", mode, viewport);

    let system = System::new();
    system.block_on(async move {
        // Termination signals sent to the process end the scene like Esc does.
        actix::spawn(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("[Main] Interrupt signal received");
                System::current().stop();
            }
        });

        // The reader winds down on its own once the scene actor is dropped.
        match mode {
            RunMode::Discrete => {
                let addr = DiscreteScene::new(&settings, viewport, TerminalSurface::new()).start();
                spawn_input_reader(addr.clone().recipient(), addr.recipient());
            }
            RunMode::Continuous | RunMode::Auto => {
                let addr = ContinuousScene::new(&settings, viewport, TerminalSurface::new()).start();
                spawn_input_reader(addr.clone().recipient(), addr.recipient());
            }
        }
    });
    system.run()?;

    drop(guard);
    info!("[Main] Scene closed");
    Ok(())
}
