//! Game tests - the tick/command state machine end to end

use gridfall::core::Game;
use gridfall::types::{BlockColor, GameAction, GamePhase, BASE_DROP_DELAY_MS};

#[test]
fn test_new_game_starts_running() {
    let game = Game::new(12345);
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.board().score(), 0);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.drop_delay_ms(), BASE_DROP_DELAY_MS);
    // Both the falling and the pre-spawned piece exist.
    assert_eq!(game.current().blocks().len(), 4);
    assert_eq!(game.next().blocks().len(), 4);
}

#[test]
fn test_same_seed_same_pieces() {
    let a = Game::new(777);
    let b = Game::new(777);
    assert_eq!(a.current().kind(), b.current().kind());
    assert_eq!(a.next().kind(), b.next().kind());
}

#[test]
fn test_tick_applies_gravity() {
    let mut game = Game::new(1);
    let before: Vec<i32> = game.current().blocks().iter().map(|b| b.y).collect();
    assert!(game.tick());
    for (a, b) in before
        .iter()
        .zip(game.current().blocks().iter().map(|b| b.y))
    {
        assert_eq!(b, a + 1);
    }
}

#[test]
fn test_move_left_stops_at_wall() {
    let mut game = Game::new(9);
    for _ in 0..20 {
        game.handle(GameAction::MoveLeft);
    }
    let min_x = game.current().blocks().iter().map(|b| b.x).min().unwrap();
    assert_eq!(min_x, 0);
    // The refused moves left the piece intact.
    assert!(!game.handle(GameAction::MoveLeft));
}

#[test]
fn test_move_right_stops_at_wall() {
    let mut game = Game::new(9);
    for _ in 0..20 {
        game.handle(GameAction::MoveRight);
    }
    let max_x = game.current().blocks().iter().map(|b| b.x).max().unwrap();
    assert_eq!(max_x, game.board().width() - 1);
}

#[test]
fn test_hard_drop_settles_piece_at_bottom() {
    let mut game = Game::new(3);
    game.handle(GameAction::HardDrop);
    assert_eq!(game.board().occupied_count(), 4);
    let max_y = game.board().blocks().map(|b| b.y).max().unwrap();
    assert_eq!(max_y, game.board().height() - 1);
}

#[test]
fn test_lock_in_promotes_next_piece() {
    let mut game = Game::new(5);
    let next_kind = game.next().kind();
    game.handle(GameAction::HardDrop);
    assert_eq!(game.current().kind(), next_kind);
}

#[test]
fn test_pause_freezes_ticks_and_commands() {
    let mut game = Game::new(2);
    game.handle(GameAction::Pause);
    assert_eq!(game.phase(), GamePhase::Paused);

    let before: Vec<(i32, i32)> = game.current().blocks().iter().map(|b| b.pos()).collect();
    assert!(!game.tick());
    assert!(!game.handle(GameAction::MoveLeft));
    assert!(!game.handle(GameAction::MoveRight));
    assert!(!game.handle(GameAction::Rotate));
    assert!(!game.handle(GameAction::MoveDown));
    let after: Vec<(i32, i32)> = game.current().blocks().iter().map(|b| b.pos()).collect();
    assert_eq!(before, after);

    game.handle(GameAction::Resume);
    assert_eq!(game.phase(), GamePhase::Running);
    assert!(game.tick());
}

#[test]
fn test_stacking_without_clears_reaches_game_over() {
    // Dropping pieces straight down in the center never completes a row,
    // so the stack must reach the spawn area in bounded time.
    let mut game = Game::new(4);
    for _ in 0..200 {
        if game.phase().is_over() {
            break;
        }
        game.handle(GameAction::HardDrop);
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.board().score(), 0);
    assert!(game.board().occupied_count() > 0);
}

#[test]
fn test_game_over_is_terminal() {
    let mut game = Game::new(4);
    while !game.phase().is_over() {
        game.handle(GameAction::HardDrop);
    }
    let cells = game.board().occupied_cells_sorted();
    assert!(!game.handle(GameAction::HardDrop));
    assert!(!game.handle(GameAction::Rotate));
    assert!(!game.handle(GameAction::Pause));
    assert!(!game.tick());
    assert_eq!(game.board().occupied_cells_sorted(), cells);
}

#[test]
fn test_lock_in_clears_completed_rows() {
    // Rows sitting complete in the grid are only removed at lock-in.
    let mut game = Game::new(8);
    for y in [18, 19] {
        for x in 0..game.board().width() {
            game.board_mut().set(x, y, BlockColor::Cyan);
        }
    }
    game.handle(GameAction::HardDrop);

    // The two full rows cleared and the locked piece compacted down onto
    // the floor; nothing else remains.
    assert_eq!(game.board().score(), 4);
    assert_eq!(game.board().occupied_count(), 4);
    let max_y = game.board().blocks().map(|b| b.y).max().unwrap();
    assert_eq!(max_y, game.board().height() - 1);
    // Clearing sped the game up by the cumulative score.
    assert_eq!(game.drop_delay_ms(), BASE_DROP_DELAY_MS - 4);
}
