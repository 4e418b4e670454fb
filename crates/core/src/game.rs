//! Game module - one level in play
//!
//! Ties the core together: grid, propagation, move counting and win
//! detection. Every mutation runs a fresh propagation pass before it
//! returns, so the `powered` flags and the completed bit are never stale
//! between calls.

use crate::grid::{Grid, GridError};
use crate::level::{LevelData, LevelError};
use crate::propagate::{PropagationReport, Propagator};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, TileView};
use crate::types::Rotation;

/// What a successful rotation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateOutcome {
    /// The tile's rotation after its quarter-turn.
    pub rotation: Rotation,
    /// Powered tile count after re-propagation.
    pub powered: usize,
    /// True exactly when this rotation took the level from unsolved to
    /// solved. Later rotations on a solved level report false again.
    pub just_completed: bool,
}

/// Complete state of one level in play.
#[derive(Debug)]
pub struct GameState {
    /// The level as authored, kept pristine for restarts.
    pristine: Grid,
    grid: Grid,
    propagator: Propagator,
    moves: u32,
    completed: bool,
    report: PropagationReport,
}

impl GameState {
    /// Start a level exactly as authored
    ///
    /// Runs the first propagation pass before returning, so an authored
    /// solved level reports completed immediately.
    pub fn from_level(level: &LevelData) -> Result<Self, LevelError> {
        let pristine = Grid::from_level(level)?;
        let mut state = Self {
            grid: pristine.clone(),
            pristine,
            propagator: Propagator::new(),
            moves: 0,
            completed: false,
            report: PropagationReport::default(),
        };
        state.refresh();
        Ok(state)
    }

    /// Start a level with non-source tiles dealt random rotations.
    pub fn from_level_scrambled(level: &LevelData, seed: u32) -> Result<Self, LevelError> {
        let mut state = Self::from_level(level)?;
        state.grid.scramble(&mut SimpleRng::new(seed));
        state.refresh();
        Ok(state)
    }

    /// Throw the current attempt away and re-deal from the authored level.
    pub fn restart(&mut self, seed: u32) {
        self.grid = self.pristine.clone();
        self.grid.scramble(&mut SimpleRng::new(seed));
        self.moves = 0;
        self.refresh();
    }

    /// Rotate the tile at (row, col) and settle the consequences
    ///
    /// On success the turn is applied, power is re-propagated and the move
    /// is counted. On error nothing changes, not even the move counter.
    pub fn rotate_at(&mut self, row: usize, col: usize) -> Result<RotateOutcome, GridError> {
        let rotation = self.grid.rotate_tile(row, col)?;
        let was_completed = self.completed;
        self.refresh();
        self.moves += 1;
        Ok(RotateOutcome {
            rotation,
            powered: self.report.powered,
            just_completed: self.completed && !was_completed,
        })
    }

    fn refresh(&mut self) {
        self.report = self.propagator.run(&mut self.grid);
        self.completed = self.grid.is_complete();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn report(&self) -> PropagationReport {
        self.report
    }

    /// Refill a snapshot in place from the current state.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        snap.clear();
        snap.rows = self.grid.rows();
        snap.cols = self.grid.cols();
        snap.tiles
            .extend(self.grid.tiles().iter().copied().map(TileView::from));
        snap.moves = self.moves;
        snap.powered = self.report.powered;
        snap.live = self.report.live;
        snap.sources = self.report.sources;
        snap.completed = self.completed;
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
