//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (constructor inputs, not hardwired into the logic)
pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 20;

/// Initial interval between automatic down-moves (milliseconds)
pub const BASE_DROP_DELAY_MS: i64 = 2000;

/// Piece variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Color tag carried by every settled or falling block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Cyan,
    Red,
    Green,
    Yellow,
    Magenta,
}

/// Discrete commands delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Pause,
    Resume,
    DebugDump,
}

/// Session lifecycle. GameOver is terminal: no gameplay command leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}

/// Points awarded per number of rows cleared in one lock-in (quadratic bonus)
pub const ROW_CLEAR_SCORES: [u32; 5] = [0, 1, 4, 9, 16];
