//! Terminal runner (default binary).
//!
//! Drives a [`Session`] from the real-time clock: every frame it renders,
//! applies all pending key presses, then ticks the session with the elapsed
//! time. Usage: `blockfall [SEED]`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Session, SessionSnapshot};
use blockfall::input::{handle_key_event, should_quit, Command};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

/// Totals over every game played in this run.
#[derive(Debug, Default)]
struct RunStats {
    pieces: u32,
    lines: u32,
    games_over: u32,
}

fn main() -> Result<()> {
    let seed = parse_seed(std::env::args().nth(1))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    let stats = result?;

    eprintln!(
        "seed {seed}: {} pieces, {} lines, {} games over",
        stats.pieces, stats.lines, stats.games_over
    );
    Ok(())
}

fn parse_seed(arg: Option<String>) -> Result<u32> {
    match arg {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid seed {s:?}, expected an unsigned integer")),
        None => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)),
    }
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<RunStats> {
    let mut session = Session::new(seed);
    let mut stats = RunStats::default();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick. Drain everything queued so all
        // of this frame's intents land before its tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        let mut ready = event::poll(timeout)?;
        while ready {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(stats);
                    }
                    match handle_key_event(key) {
                        Some(Command::Play(intent)) => {
                            session.handle_intent(intent);
                        }
                        Some(Command::Reset) => session.reset(),
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            ready = event::poll(Duration::ZERO)?;
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms);

            if let Some(event) = session.take_last_event() {
                stats.pieces += 1;
                stats.lines += event.lines_cleared;
                if event.topped_out {
                    stats.games_over += 1;
                }
            }
        }
    }
}
