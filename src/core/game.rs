//! Game module - the tick/command state machine
//!
//! Owns the board, the falling piece and the pre-spawned next piece, and
//! drives one discrete step at a time: a tick tries to move the piece
//! down, and on failure locks it into the board, clears completed rows and
//! spawns the next piece. Commands are dispatched the same way the timer
//! tick is, so the whole session is single-threaded by construction.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::PiecePicker;
use crate::types::{GameAction, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    picker: PiecePicker,
    phase: GamePhase,
}

impl Game {
    /// Start a session on an empty default-sized board, with the current
    /// and next pieces drawn from a seeded picker.
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(BOARD_WIDTH, BOARD_HEIGHT), seed)
    }

    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut picker = PiecePicker::new(seed);
        let current = Self::spawn_from(&mut picker, &board);
        let next = Self::spawn_from(&mut picker, &board);
        Self {
            board,
            current,
            next,
            picker,
            phase: GamePhase::Running,
        }
    }

    fn spawn_from(picker: &mut PiecePicker, board: &Board) -> Piece {
        // Pieces spawn centered at the top of the board.
        Piece::spawn(picker.next_kind(), board.width() / 2, 0)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for test and bench setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Interval until the next automatic down-move.
    pub fn drop_delay_ms(&self) -> i64 {
        self.board.drop_delay_ms()
    }

    /// One automatic downward step. Returns true if the piece moved;
    /// false means it locked in (or the session is not running).
    pub fn tick(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        self.step_down()
    }

    /// Try to move the current piece down one row; lock it in on failure.
    fn step_down(&mut self) -> bool {
        if self.current.can_move(&self.board, 0, 1) {
            self.current.translate(0, 1);
            return true;
        }
        self.lock_current();
        false
    }

    /// Lock-in: merge the piece into the grid, promote the next piece,
    /// pre-spawn a new one, then either clear rows or end the game.
    ///
    /// Row clearing runs only after the fresh piece is known to fit; a
    /// blocked spawn ends the session with the grid untouched past the
    /// merge.
    fn lock_current(&mut self) {
        let fresh = Self::spawn_from(&mut self.picker, &self.board);
        let settled = std::mem::replace(&mut self.current, std::mem::replace(&mut self.next, fresh));
        self.board.merge(settled);

        if self.board.can_spawn(&self.current) {
            self.board.remove_complete_rows();
        } else {
            self.phase = GamePhase::GameOver;
        }
    }

    /// Dispatch one discrete command. Returns true if any state changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.phase.is_running() {
                    self.phase = GamePhase::Paused;
                    return true;
                }
                false
            }
            GameAction::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                    return true;
                }
                false
            }
            // Sorted cell listing is produced by the caller; no state here.
            GameAction::DebugDump => false,
            _ if !self.phase.is_running() => false,
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            // A blocked down-move locks the piece, same as a timer tick.
            GameAction::MoveDown => {
                self.step_down();
                true
            }
            GameAction::Rotate => {
                if self.current.can_rotate(&self.board) {
                    self.current.rotate(&self.board);
                    return true;
                }
                false
            }
            GameAction::HardDrop => {
                while self.step_down() {}
                true
            }
        }
    }

    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        if self.current.can_move(&self.board, dx, dy) {
            self.current.translate(dx, dy);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockColor;

    #[test]
    fn test_tick_moves_piece_down() {
        let mut game = Game::new(1);
        let before: Vec<i32> = game.current().blocks().iter().map(|b| b.y).collect();
        assert!(game.tick());
        let after: Vec<i32> = game.current().blocks().iter().map(|b| b.y).collect();
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(b - a, 1);
        }
    }

    #[test]
    fn test_paused_ignores_gameplay_commands() {
        let mut game = Game::new(1);
        assert!(game.handle(GameAction::Pause));
        let before = game.current().clone();
        assert!(!game.handle(GameAction::MoveLeft));
        assert!(!game.handle(GameAction::Rotate));
        assert!(!game.handle(GameAction::HardDrop));
        assert!(!game.tick());
        assert_eq!(game.current(), &before);
        assert!(game.handle(GameAction::Resume));
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_pause_resume_transitions_only() {
        let mut game = Game::new(1);
        // Resume is meaningless while running.
        assert!(!game.handle(GameAction::Resume));
        game.handle(GameAction::Pause);
        // Pausing twice is a no-op.
        assert!(!game.handle(GameAction::Pause));
    }

    #[test]
    fn test_hard_drop_locks_and_spawns() {
        let mut game = Game::new(1);
        assert_eq!(game.board().occupied_count(), 0);
        assert!(game.handle(GameAction::HardDrop));
        // The dropped piece settled and a fresh one is falling.
        assert_eq!(game.board().occupied_count(), 4);
        assert!(game.phase().is_running());
        assert!(game.current().blocks().iter().all(|b| b.y <= 1));
    }

    #[test]
    fn test_move_down_at_floor_locks() {
        let mut game = Game::new(1);
        for _ in 0..game.board().height() {
            game.handle(GameAction::MoveDown);
        }
        assert!(game.board().occupied_count() >= 4);
    }

    #[test]
    fn test_blocked_spawn_ends_game_without_clearing() {
        let mut game = Game::new(1);
        // Walk the falling piece below the spawn area first.
        for _ in 0..10 {
            game.handle(GameAction::MoveDown);
        }
        // Every template includes the (0, 0) offset, so occupying the
        // spawn center alone blocks any fresh piece.
        game.board_mut().set(5, 0, BlockColor::Red);
        game.handle(GameAction::HardDrop);
        assert_eq!(game.phase(), GamePhase::GameOver);
        // Only the locked piece was added; nothing was cleared or shifted.
        assert_eq!(game.board().occupied_count(), 5);
        assert!(game.board().get(5, 0).is_some());
        // Terminal: further commands and ticks change nothing.
        assert!(!game.handle(GameAction::MoveLeft));
        assert!(!game.tick());
        assert_eq!(game.board().occupied_count(), 5);
    }
}
