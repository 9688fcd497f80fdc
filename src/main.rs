//! Terminal runner (default binary).
//!
//! Reads an optional JSON config named by `STACK_TETRIS_CONFIG`, sends
//! `tracing` output to the file named by `STACK_TETRIS_LOG` (the terminal
//! belongs to the renderer), then runs the render/poll/tick loop until quit.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stack_tetris::core::GameState;
use stack_tetris::input::{action_for_event, should_quit};
use stack_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use stack_tetris::types::GameConfig;

const CONFIG_ENV: &str = "STACK_TETRIS_CONFIG";
const LOG_ENV: &str = "STACK_TETRIS_LOG";

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("create log file {}", Path::new(&path).display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config() -> Result<GameConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(GameConfig::default());
    };
    let path = Path::new(&path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    info!(?config, "starting game");
    let tick_ms = config.tick_ms;
    let mut game_state = GameState::with_config(config);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(tick_ms));
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // The core gets the measured frame time; game over freezes it.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(elapsed_ms(elapsed));
        }
    }
}

/// Wall-clock frame time in whole milliseconds, saturating at `u32::MAX`.
fn elapsed_ms(elapsed: Duration) -> u32 {
    u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
}
