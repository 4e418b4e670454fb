//! Power propagation - breadth-first flood from sources
//!
//! Power flows from every source tile outward, one neighbor at a time. A
//! hop only happens when both sides agree: the powered tile must present a
//! port toward the neighbor and the neighbor a port straight back. The
//! flood rewrites every `powered` flag from scratch, so the grid never
//! carries stale power from an earlier pass.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::tiles::{active_ports, port_directions};
use crate::types::TileKind;

/// Counters from one propagation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Tiles powered after the pass (sources included).
    pub powered: usize,
    /// Non-empty tiles, the win target.
    pub live: usize,
    /// Source tiles found.
    pub sources: usize,
}

/// Reusable propagation pass
///
/// Owns the BFS queue and visited set so repeated passes over the same
/// grid allocate nothing once warm.
#[derive(Debug, Default)]
pub struct Propagator {
    queue: VecDeque<usize>,
    visited: Vec<bool>,
}

impl Propagator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every `powered` flag on the grid
    ///
    /// Clears all power, seeds the flood with every source, then walks
    /// outward through mutually matched ports. Unreachable tiles end the
    /// pass unpowered no matter what they were before.
    pub fn run(&mut self, grid: &mut Grid) -> PropagationReport {
        self.queue.clear();
        self.visited.clear();
        self.visited.resize(grid.len(), false);

        grid.reset_power();

        let mut report = PropagationReport::default();

        for (idx, tile) in grid.tiles_mut().iter_mut().enumerate() {
            if tile.kind == TileKind::Source {
                tile.powered = true;
                self.visited[idx] = true;
                self.queue.push_back(idx);
                report.sources += 1;
            }
        }

        while let Some(idx) = self.queue.pop_front() {
            let tile = grid.tiles()[idx];
            for dir in port_directions(tile.kind, tile.rotation) {
                let Some(nidx) = grid.neighbor(idx, dir) else {
                    continue;
                };
                if self.visited[nidx] {
                    continue;
                }
                let neighbor = grid.tiles()[nidx];
                if !active_ports(neighbor.kind, neighbor.rotation).contains(dir.opposite()) {
                    continue;
                }
                grid.tiles_mut()[nidx].powered = true;
                self.visited[nidx] = true;
                self.queue.push_back(nidx);
            }
        }

        report.powered = grid.powered_count();
        report.live = grid.live_count();
        report
    }
}
