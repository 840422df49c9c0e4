//! Piece module - the falling tetromino and its seven-variant catalog
//!
//! Each variant is plain data: a fixed template of four offsets from the
//! spawn center, a color, a pivot block index, and a rotation policy.
//! Rotation is a 90-degree turn about the pivot block; the I, S and Z
//! variants alternate rotation direction every turn to reduce visual drift.

use crate::core::block::Block;
use crate::core::board::Board;
use crate::types::{BlockColor, PieceKind};

/// Offset of a single block relative to the spawn center
pub type TemplateOffset = (i32, i32);

/// Template of a piece - 4 block offsets from the spawn center
pub type PieceTemplate = [TemplateOffset; 4];

/// Get the initial template for a piece kind
pub fn template(kind: PieceKind) -> PieceTemplate {
    match kind {
        PieceKind::I => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        PieceKind::J => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        PieceKind::O => [(0, 0), (-1, 0), (0, 1), (-1, 1)],
        PieceKind::S => [(0, 0), (0, 1), (1, 0), (-1, 1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

/// Color tag for a piece kind
pub fn color(kind: PieceKind) -> BlockColor {
    match kind {
        PieceKind::I => BlockColor::Blue,
        PieceKind::J => BlockColor::Orange,
        PieceKind::L => BlockColor::Cyan,
        PieceKind::O => BlockColor::Red,
        PieceKind::S => BlockColor::Green,
        PieceKind::T => BlockColor::Yellow,
        PieceKind::Z => BlockColor::Magenta,
    }
}

/// Index of the pivot block within the template
fn pivot_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::O => 0,
        _ => 1,
    }
}

/// Whether the variant rotates at all (O does not)
fn rotates(kind: PieceKind) -> bool {
    kind != PieceKind::O
}

/// Whether the variant alternates rotation direction after each turn
fn shifts_rotation_dir(kind: PieceKind) -> bool {
    matches!(kind, PieceKind::I | PieceKind::S | PieceKind::Z)
}

/// Starting rotation direction (S and Z begin counter-clockwise)
fn initial_rotation_dir(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::S | PieceKind::Z => -1,
        _ => 1,
    }
}

/// The active falling piece: exactly four blocks moving as a unit.
///
/// Block order is significant; `blocks[pivot]` is the rotation center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    blocks: [Block; 4],
    pivot: usize,
    rotation_dir: i32,
    shift_rotation_dir: bool,
}

impl Piece {
    /// Build a piece of the given kind centered at (cx, cy).
    pub fn spawn(kind: PieceKind, cx: i32, cy: i32) -> Self {
        let color = color(kind);
        let blocks = template(kind).map(|(dx, dy)| Block::new(cx + dx, cy + dy, color));
        Self {
            kind,
            blocks,
            pivot: pivot_index(kind),
            rotation_dir: initial_rotation_dir(kind),
            shift_rotation_dir: shifts_rotation_dir(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    pub fn rotation_dir(&self) -> i32 {
        self.rotation_dir
    }

    /// True iff every block, translated by (dx, dy), lands on a legal
    /// board position. Pure query; the board is the single legality
    /// authority.
    pub fn can_move(&self, board: &Board, dx: i32, dy: i32) -> bool {
        self.blocks
            .iter()
            .all(|b| board.can_place(b.x + dx, b.y + dy))
    }

    /// Translate every block unconditionally. Callers gate via `can_move`;
    /// the validation/mutation split keeps multi-step checks atomic.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for block in &mut self.blocks {
            block.translate(dx, dy);
        }
    }

    /// Hypothetical position of `block` after a 90-degree turn about the
    /// pivot in the current rotation direction.
    fn rotated_pos(&self, block: &Block) -> (i32, i32) {
        let p = &self.blocks[self.pivot];
        let d = self.rotation_dir;
        let new_x = p.x - d * p.y + d * block.y;
        let new_y = p.y + d * p.x - d * block.x;
        (new_x, new_y)
    }

    /// True iff every block's post-rotation position is legal.
    ///
    /// Checked against the full occupied grid: the piece's own cells are
    /// never in the grid at this stage (merge happens strictly after
    /// lock-in), so no self-exclusion is needed.
    pub fn can_rotate(&self, board: &Board) -> bool {
        if !rotates(self.kind) {
            return false;
        }
        self.blocks.iter().all(|b| {
            let (x, y) = self.rotated_pos(b);
            board.can_place(x, y)
        })
    }

    /// Rotate about the pivot if legal. A no-op for the O piece.
    ///
    /// Whether or not the rotation applied, a direction-shifting variant
    /// flips its rotation direction for next time.
    pub fn rotate(&mut self, board: &Board) {
        if !rotates(self.kind) {
            return;
        }
        if self.can_rotate(board) {
            let rotated = self.blocks.map(|b| {
                let (x, y) = self.rotated_pos(&b);
                Block::new(x, y, b.color)
            });
            self.blocks = rotated;
        }
        if self.shift_rotation_dir {
            self.rotation_dir = -self.rotation_dir;
        }
    }

    /// Consume the piece, yielding its blocks for the board to settle.
    pub(crate) fn into_blocks(self) -> [Block; 4] {
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_have_four_unique_offsets() {
        for kind in PieceKind::ALL {
            let t = template(kind);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(t[i], t[j], "{:?} has a duplicate offset", kind);
                }
            }
        }
    }

    #[test]
    fn test_spawn_positions() {
        let piece = Piece::spawn(PieceKind::T, 5, 0);
        let coords: Vec<(i32, i32)> = piece.blocks().iter().map(|b| b.pos()).collect();
        assert_eq!(coords, vec![(4, 0), (5, 0), (6, 0), (5, 1)]);
    }

    #[test]
    fn test_rotation_dir_defaults() {
        assert_eq!(Piece::spawn(PieceKind::T, 5, 0).rotation_dir(), 1);
        assert_eq!(Piece::spawn(PieceKind::S, 5, 0).rotation_dir(), -1);
        assert_eq!(Piece::spawn(PieceKind::Z, 5, 0).rotation_dir(), -1);
        assert_eq!(Piece::spawn(PieceKind::I, 5, 0).rotation_dir(), 1);
    }

    #[test]
    fn test_rotated_pos_about_pivot() {
        // T at (5, 5): pivot is blocks[1] at (5, 5); the block at (4, 5)
        // maps to (5, 6) with d = +1.
        let piece = Piece::spawn(PieceKind::T, 5, 5);
        let left = piece.blocks()[0];
        assert_eq!(piece.rotated_pos(&left), (5, 6));
        // Pivot maps to itself.
        let pivot = piece.blocks()[1];
        assert_eq!(piece.rotated_pos(&pivot), (5, 5));
    }
}
