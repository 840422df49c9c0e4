//! Board module - manages the settled grid, scoring and speed progression
//!
//! The grid is a partial map from (x, y) to the block occupying that cell;
//! absence means empty. Coordinates: x ranges 0..width (left to right),
//! y ranges 0..height (top to bottom). The board is the single authority
//! for placement legality; pieces delegate every block check to it.

use std::collections::HashMap;

use crate::core::block::Block;
use crate::core::piece::Piece;
use crate::types::{BlockColor, BASE_DROP_DELAY_MS, ROW_CLEAR_SCORES};

#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    /// Settled cells keyed by position. Invariant: key == block.pos(), and
    /// every key lies inside [0, width) x [0, height).
    grid: HashMap<(i32, i32), Block>,
    score: u32,
    base_delay_ms: i64,
    /// Cumulative reduction of the drop delay. Grows by the current score
    /// on every clearing lock-in, so speed-up is super-linear.
    delta_delay_ms: i64,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            grid: HashMap::new(),
            score: 0,
            base_delay_ms: BASE_DROP_DELAY_MS,
            delta_delay_ms: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current interval between automatic down-moves. Can go non-positive
    /// after enough clears; the event loop clamps when sleeping.
    pub fn drop_delay_ms(&self) -> i64 {
        self.base_delay_ms - self.delta_delay_ms
    }

    /// True iff (x, y) is inside the board and unoccupied.
    pub fn can_place(&self, x: i32, y: i32) -> bool {
        x >= 0
            && x < self.width
            && y >= 0
            && y < self.height
            && !self.grid.contains_key(&(x, y))
    }

    /// True iff the piece fits where it currently stands. A false result
    /// for a freshly spawned piece is the game-over signal.
    pub fn can_spawn(&self, piece: &Piece) -> bool {
        piece.can_move(self, 0, 0)
    }

    /// Settle a piece into the grid, consuming it. All positions must
    /// already be legal; this is not re-checked.
    pub fn merge(&mut self, piece: Piece) {
        for block in piece.into_blocks() {
            self.grid.insert(block.pos(), block);
        }
    }

    /// Settled block at (x, y), if any.
    pub fn get(&self, x: i32, y: i32) -> Option<&Block> {
        self.grid.get(&(x, y))
    }

    /// Place a single block directly (board setup in tests and benches).
    pub fn set(&mut self, x: i32, y: i32, color: BlockColor) {
        self.grid.insert((x, y), Block::new(x, y, color));
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.len()
    }

    /// Iterate over all settled blocks (render order unspecified).
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.grid.values()
    }

    /// Sorted occupied coordinates, for the debug dump.
    pub fn occupied_cells_sorted(&self) -> Vec<(i32, i32)> {
        let mut cells: Vec<(i32, i32)> = self.grid.keys().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// True iff every column of row y is occupied.
    pub fn row_is_complete(&self, y: i32) -> bool {
        (0..self.width).all(|x| self.grid.contains_key(&(x, y)))
    }

    /// Remove every entry of row y from the grid.
    pub fn clear_row(&mut self, y: i32) {
        for x in 0..self.width {
            self.grid.remove(&(x, y));
        }
    }

    /// Move every block in rows from_y down to 0 one row lower.
    ///
    /// Scans from from_y decreasing toward 0, so a block shifted into a
    /// lower row is never picked up again in the same pass: each call
    /// cascades exactly one row.
    pub fn shift_rows_down(&mut self, from_y: i32) {
        let mut y = from_y;
        while y >= 0 {
            for x in 0..self.width {
                if let Some(block) = self.grid.remove(&(x, y)) {
                    self.grid.insert((x, y + 1), Block::new(x, y + 1, block.color));
                }
            }
            y -= 1;
        }
    }

    /// Clear every complete row, compacting the rows above after each
    /// clear before the scan advances, and returns the number cleared.
    ///
    /// The clear-then-compact-before-continuing order is what makes
    /// multi-row clears (e.g. rows 3 and 5 in one lock-in) land blocks in
    /// the right final positions. Scoring and the speed-up are applied
    /// here, as part of the same lock-in step.
    pub fn remove_complete_rows(&mut self) -> usize {
        let mut complete_rows = 0;
        for y in 0..self.height {
            if self.row_is_complete(y) {
                complete_rows += 1;
                self.clear_row(y);
                self.shift_rows_down(y - 1);
            }
        }
        self.update_score(complete_rows);
        if complete_rows != 0 {
            // Intentionally the cumulative score, not the increment; see
            // DESIGN.md for why this quirk is preserved.
            self.delta_delay_ms += self.score as i64;
        }
        complete_rows
    }

    /// Add points for n rows cleared in one lock-in. A piece has four
    /// blocks, so n is capped at 4.
    pub fn update_score(&mut self, n: usize) {
        self.score += ROW_CLEAR_SCORES[n.min(4)];
    }
}
