//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the `term`
//! crate. One thread: wait for keys until the next tick is due, then tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_snake::core::GameSnapshot;
use tui_snake::engine::{food_rng, Session, SnakeConfig};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::logging;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Input poll interval once the tick timer is cancelled (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = SnakeConfig::from_env().with_args(&args)?;
    logging::init(config.log_path.as_deref())?;
    config.log_summary();

    let mut term = TerminalRenderer::enter()?;
    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "exiting with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &SnakeConfig) -> Result<()> {
    let view = GameView::default();
    let mut session = Session::start(food_rng(config), config.tick_period(), Instant::now());

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
            dirty = false;
        }

        let timeout = session.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(round = session.round(), "quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.handle(action, Instant::now());
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if session.update(Instant::now()).is_some() {
            dirty = true;
        }
    }
}
