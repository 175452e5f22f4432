//! End-to-end session scenarios.

use tictactoe_core::{Board, GameSession, GameStatus, MemoryAudit, Player, Square};

fn play(session: &mut GameSession<impl tictactoe_core::AuditSink>, cells: &[usize]) {
    for &cell in cells {
        session.select_cell(cell);
    }
}

#[test]
fn test_first_move_places_x_and_passes_turn() {
    let mut session = GameSession::new();
    session.select_cell(0);

    assert_eq!(session.current_board().get(0), Some(Square::Occupied(Player::X)));
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_reselecting_occupied_cell_is_noop() {
    let mut session = GameSession::new();
    session.select_cell(0);
    let before = session.state().clone();

    assert!(!session.select_cell(0));
    assert_eq!(session.state(), &before);
    assert_eq!(session.current_player(), Player::O);
}

#[test]
fn test_top_row_win_is_terminal() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 2]);

    assert_eq!(session.winner(), Some(Player::X));
    assert_eq!(session.status(), GameStatus::Won(Player::X));
    assert!(!session.is_draw());
    assert!(session.is_game_over());
    // The last mover stays recorded as current player.
    assert_eq!(session.current_player(), Player::X);

    let frozen = session.state().clone();
    for cell in [5, 6, 7, 8, 0, 42] {
        assert!(!session.select_cell(cell));
    }
    assert_eq!(session.state(), &frozen);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 8, 1, 2, 6, 3, 5, 7]);

    assert!(session.is_draw());
    assert_eq!(session.winner(), None);
    assert_eq!(session.status(), GameStatus::Draw);
    assert!(session.is_game_over());
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_restart_after_win() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 3, 1, 4, 2]);
    session.restart();

    assert_eq!(session.current_board(), &Board::new());
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert!(session.select_cell(4));
}

#[test]
fn test_restart_after_draw() {
    let mut session = GameSession::new();
    play(&mut session, &[0, 4, 8, 1, 2, 6, 3, 5, 7]);
    session.restart();

    assert_eq!(session.current_board(), &Board::new());
    assert_eq!(session.current_player(), Player::X);
    assert!(!session.is_draw());
    assert!(!session.is_game_over());
}

#[test]
fn test_restart_mid_game_and_on_fresh_session() {
    let mut session = GameSession::new();
    session.restart();
    assert_eq!(session.current_board(), &Board::new());

    play(&mut session, &[4, 0]);
    session.restart();
    assert_eq!(session.current_board(), &Board::new());
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_winning_on_last_cell_is_win_not_draw() {
    let mut session = GameSession::new();
    // X completes the 0-4-8 diagonal with the ninth mark.
    play(&mut session, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert_eq!(session.current_board().empty_count(), 0);
    assert_eq!(session.winner(), Some(Player::X));
    assert!(!session.is_draw());
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_audit_trail_for_full_game() {
    let mut session = GameSession::with_audit(MemoryAudit::new());
    play(&mut session, &[0, 3, 1, 4, 2, 5]);
    session.restart();

    let entries = session.audit().entries();
    // Five applied moves, one ignored post-win selection, one restart.
    assert_eq!(entries.len(), 6);
    let last_move = &entries[4];
    assert_eq!(last_move.after().board().to_compact(), "XXXOO....");
    assert_eq!(*last_move.after().current_player(), Player::X);
    assert_eq!(entries[5].after().board(), &Board::new());
}
