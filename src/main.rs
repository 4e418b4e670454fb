//! Terminal circuit puzzle runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no TUI widget frameworks).

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_circuit::core::{GameSnapshot, GameState};
use tui_circuit::input::{handle_key_event, should_quit, Cursor};
use tui_circuit::levels::{self, LevelSet};
use tui_circuit::progress::{self, ProgressStore};
use tui_circuit::term::{Cues, FrameBuffer, GridView, HudView, TerminalRenderer, Viewport};
use tui_circuit::types::{GameAction, INPUT_POLL_MS, LEVEL_SCORE};

fn main() -> Result<()> {
    // Optional argument: path to a custom level pack. Loaded before the
    // terminal flips modes so errors print like normal output.
    let set = match std::env::args_os().nth(1) {
        Some(path) => levels::load_file(&PathBuf::from(path))?,
        None => levels::builtin(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &set);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, set: &LevelSet) -> Result<()> {
    let mut progress = ProgressStore::open(progress::default_path());
    let mut level_index = first_playable(set, &progress);
    let mut game = start_level(set, level_index)?;

    let view = GridView::default();
    let cues = Cues::default();
    let mut cursor = Cursor::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut status: Option<&'static str> = None;

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let hud = HudView {
            level_no: (level_index + 1) as u32,
            level_count: set.len() as u32,
            best_score: progress.score(level_index),
            message: status,
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &snap,
            Some((cursor.row, cursor.col)),
            &hud,
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Input. The game is purely key-driven; the poll timeout only
        // bounds how soon a terminal resize shows up.
        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        let Some(action) = handle_key_event(key) else {
            continue;
        };

        match action {
            GameAction::MoveCursor(dir) => {
                cursor.step(dir, game.rows(), game.cols());
            }
            GameAction::Rotate => {
                // A finished level is read-only until N or R leaves it.
                if game.completed() {
                    continue;
                }
                match game.rotate_at(cursor.row, cursor.col) {
                    Ok(outcome) => {
                        status = None;
                        cues.click()?;
                        if outcome.just_completed {
                            cues.win()?;
                            progress.complete_level(level_index, LEVEL_SCORE);
                            // A failed write is not worth crashing mid-game.
                            let _ = progress.save();
                        }
                    }
                    Err(err) => {
                        status = Some(err.message());
                    }
                }
            }
            GameAction::Restart => {
                game.restart(wall_seed());
                status = None;
            }
            GameAction::NextLevel => {
                let next = level_index + 1;
                if next >= set.len() {
                    status = Some("no more levels");
                } else if !progress.is_unlocked(next) {
                    status = Some("level locked");
                } else {
                    level_index = next;
                    game = start_level(set, level_index)?;
                    cursor.clamp(game.rows(), game.cols());
                    status = None;
                }
            }
            GameAction::PrevLevel => {
                if level_index == 0 {
                    status = Some("first level");
                } else {
                    level_index -= 1;
                    game = start_level(set, level_index)?;
                    cursor.clamp(game.rows(), game.cols());
                    status = None;
                }
            }
        }
    }
}

fn start_level(set: &LevelSet, index: usize) -> Result<GameState> {
    let level = set
        .get(index)
        .ok_or_else(|| anyhow!("level {} does not exist", index + 1))?;
    GameState::from_level_scrambled(level, wall_seed())
        .map_err(|err| anyhow!("level {} failed to load: {}", index + 1, err.message()))
}

/// First level worth playing: the lowest unlocked, uncompleted one, or
/// the newest unlock when everything so far is beaten.
fn first_playable(set: &LevelSet, progress: &ProgressStore) -> usize {
    let mut last_unlocked = 0;
    for index in 0..set.len() {
        if !progress.is_unlocked(index) {
            break;
        }
        if !progress.is_completed(index) {
            return index;
        }
        last_unlocked = index;
    }
    last_unlocked
}

fn wall_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
