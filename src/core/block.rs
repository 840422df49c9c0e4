//! Block module - a single occupied unit square on the grid

use crate::types::BlockColor;

/// One occupied cell. Owned either by the active falling piece or by the
/// board's settled grid, never both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub color: BlockColor,
}

impl Block {
    pub fn new(x: i32, y: i32, color: BlockColor) -> Self {
        Self { x, y, color }
    }

    /// Shift by (dx, dy). No validation: the caller must have already
    /// confirmed legality via the board.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grid key for this block's position.
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
