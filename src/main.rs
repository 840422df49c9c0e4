//! Terminal gridfall runner.
//!
//! Single-threaded, timer-driven loop: crossterm events are polled with a
//! timeout equal to the remaining drop delay, and each expiry drives one
//! automatic down-move. Pause suspends only the tick scheduling.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::Game;
use gridfall::input::{handle_key_event, should_quit};
use gridfall::persist::{self, DEFAULT_RESULT_PATH};
use gridfall::term::TerminalRenderer;
use gridfall::types::GameAction;

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    // Read the prior best before the terminal goes raw; a missing record
    // is logged and play continues.
    let best = persist::load(DEFAULT_RESULT_PATH);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, best);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, best: persist::BestResult) -> Result<()> {
    let mut game = Game::new(clock_seed());
    let mut last_tick = Instant::now();
    let mut new_champion = false;
    let mut result_saved = false;

    loop {
        term.draw(&game, &best, new_champion)?;

        // Ticks are suspended outside Running; just block on input then.
        let timeout = if game.phase().is_running() {
            let delay = Duration::from_millis(game.drop_delay_ms().max(0) as u64);
            delay.saturating_sub(last_tick.elapsed())
        } else {
            Duration::from_secs(3600)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::DebugDump) => {
                        for cell in game.board().occupied_cells_sorted() {
                            eprint!("{:?} ", cell);
                        }
                        eprintln!();
                    }
                    Some(GameAction::Resume) => {
                        if game.handle(GameAction::Resume) {
                            // The tick clock restarts on resume.
                            last_tick = Instant::now();
                        }
                    }
                    Some(action) => {
                        game.handle(action);
                    }
                    None => {}
                }
            }
        } else if game.phase().is_running() {
            game.tick();
            last_tick = Instant::now();
        }

        if game.phase().is_over() && !result_saved {
            result_saved = true;
            match persist::save_if_better(
                DEFAULT_RESULT_PATH,
                game.board().score(),
                game.drop_delay_ms(),
            ) {
                Ok(wrote) => new_champion = wrote,
                Err(err) => eprintln!("could not save best result: {err:#}"),
            }
        }
    }
}
