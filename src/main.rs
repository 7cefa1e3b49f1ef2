//! Terminal Snake runner (default binary).
//!
//! Asks for a difficulty, takes over the terminal and runs the engine until
//! the player quits. Set `RUST_LOG` to write a trace to `snake-eater.log` in
//! the system temp directory.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use snake_eater::engine::GameEngine;
use snake_eater::prompt::read_difficulty;
use snake_eater::term::{install_panic_hook, TermSurface, TickLimiter};
use snake_eater::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<()> {
    init_logging()?;

    let difficulty = read_difficulty(&mut io::stdin().lock(), &mut io::stdout())?;
    info!(difficulty = difficulty.ticks_per_second(), "starting");

    // Release builds abort on panic, so no destructor gets to restore the tty.
    install_panic_hook();
    let mut surface = TermSurface::open(BOARD_WIDTH, BOARD_HEIGHT)?;
    let mut clock = TickLimiter::new();
    let mut engine = GameEngine::new(difficulty);

    let result = engine.run(&mut surface, &mut clock);

    // Always try to restore terminal state.
    let _ = surface.close();
    info!(score = engine.score(), ticks = engine.ticks(), "exiting");
    result
}

fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let path = std::env::temp_dir().join("snake-eater.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    Ok(())
}
