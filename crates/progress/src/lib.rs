//! Progress store - which levels are beaten, and best scores
//!
//! A small JSON file tracks unlocks, completion flags and best scores
//! across runs. Reads are forgiving: a missing or unreadable file just
//! means fresh progress, the game never refuses to start over save data.
//! Writes go through [`ProgressStore::save`] and do report errors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the save file location.
pub const SAVE_PATH_ENV: &str = "TUI_CIRCUIT_SAVE";

fn default_highest() -> usize {
    1
}

/// Everything persisted between runs.
///
/// `highest_unlocked` is an exclusive bound: levels `0..highest_unlocked`
/// are playable. It starts at 1 so a fresh profile can play level 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default = "default_highest")]
    pub highest_unlocked: usize,
    /// Per-level completion flags, indexed by level.
    #[serde(default)]
    pub completion: Vec<bool>,
    /// Per-level best scores, indexed by level.
    #[serde(default)]
    pub scores: Vec<u32>,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            highest_unlocked: 1,
            completion: Vec::new(),
            scores: Vec::new(),
        }
    }
}

/// Progress bound to one save file.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    data: SaveData,
}

impl ProgressStore {
    /// Open the store at `path`, starting fresh if the file is missing
    /// or does not parse.
    pub fn open(path: PathBuf) -> Self {
        let data = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, data }
    }

    /// Write the current progress to disk, creating parent directories
    /// as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    anyhow!("cannot create save directory {}: {}", parent.display(), err)
                })?;
            }
        }
        let text = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, text)
            .map_err(|err| anyhow!("cannot write save file {}: {}", self.path.display(), err))?;
        Ok(())
    }

    /// Record a finished level
    ///
    /// Marks it complete, keeps the better of the old and new score, and
    /// unlocks the level after it. Beating a level twice never lowers a
    /// score or re-locks anything.
    pub fn complete_level(&mut self, index: usize, score: u32) {
        if self.data.completion.len() <= index {
            self.data.completion.resize(index + 1, false);
        }
        if self.data.scores.len() <= index {
            self.data.scores.resize(index + 1, 0);
        }
        self.data.completion[index] = true;
        self.data.scores[index] = self.data.scores[index].max(score);
        self.data.highest_unlocked = self.data.highest_unlocked.max(index + 2);
    }

    /// The first level is always playable; the rest unlock in order.
    pub fn is_unlocked(&self, index: usize) -> bool {
        index == 0 || index < self.data.highest_unlocked
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.data.completion.get(index).copied().unwrap_or(false)
    }

    /// Best score for a level, 0 if never beaten.
    pub fn score(&self, index: usize) -> u32 {
        self.data.scores.get(index).copied().unwrap_or(0)
    }

    /// Wipe all progress in memory. Does not touch the file until the
    /// next [`save`](Self::save).
    pub fn reset(&mut self) {
        self.data = SaveData::default();
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }
}

/// Where progress lives by default
///
/// `TUI_CIRCUIT_SAVE` overrides everything; otherwise the file sits in a
/// dot directory under `$HOME`, falling back to the working directory
/// when even `$HOME` is unset.
pub fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SAVE_PATH_ENV) {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".tui-circuit")
            .join("progress.json"),
        None => PathBuf::from("tui-circuit-progress.json"),
    }
}
