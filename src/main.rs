//! Terminal host for the Tetris plugin.
//!
//! Drives a [`Session`] from crossterm events and a host-side tick clock,
//! and paints frames through the framebuffer renderer.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use plugin_tetris::core::GameState;
use plugin_tetris::engine::Session;
use plugin_tetris::input::{handle_key_event, should_quit};
use plugin_tetris::term::{FrameBuffer, TerminalRenderer, TerminalView, Viewport};

/// Idle wait when the gravity timer is stopped (paused or game over)
const IDLE_POLL: Duration = Duration::from_millis(250);

/// plugin-tetris - single-player Tetris in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece generator (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file; the terminal is owned by the game
    #[arg(short, long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let game = match args.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    };
    info!(seed = ?game.seed(), "starting session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::with_tick_timer(game));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    session.start();

    let view = TerminalView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        if let Some(frame) = session.frame_if_dirty() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(frame, Viewport::new(w, h), &mut fb);
            term.set_title(frame.title)?;
            term.draw_swap(&mut fb)?;
        }

        let timeout = session.until_next_tick().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!(score = session.game().score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!(?action, "key");
                        session.action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    session.invalidate();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        session.advance(now - last);
        last = now;
    }
}
