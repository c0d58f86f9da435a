//! Plain-text rendering of a session.

use crate::config::Settings;
use tictactoe_core::{Cell, Session, Square};

/// Draws the current board; winning cells are bracketed.
pub fn board(session: &Session) -> String {
    let board = session.current_board();
    let rows: Vec<String> = Cell::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let symbol = match board.get(*cell) {
                        Square::Empty => (cell.index() + 1).to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    };
                    if session.is_winning_cell(*cell) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Lists every history position in the session's display order.
pub fn move_list(session: &Session) -> String {
    session
        .move_list()
        .iter()
        .map(|entry| format!("{:>2}. {}", entry.position, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full screen: board, status line and, if enabled, the move list.
pub fn screen(session: &Session, settings: &Settings) -> String {
    let mut out = format!("{}\n\n{}\n", board(session), session.status_line());
    if *settings.show_move_list() {
        out.push_str(&format!(
            "\nMoves ({}):\n{}\n",
            session.order().label(),
            move_list(session)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::MoveOrder;

    #[test]
    fn test_empty_board_shows_numbers() {
        let session = Session::new();
        assert_eq!(
            board(&session),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_line_bracketed() {
        let session = Session::replay([0, 1, 4, 3, 8]).unwrap();
        assert_eq!(
            board(&session),
            "[X]| O | 3 \n---+---+---\n O |[X]| 6 \n---+---+---\n 7 | 8 |[X]"
        );
    }

    #[test]
    fn test_move_list_descending() {
        let mut session = Session::replay([4]).unwrap();
        session.toggle_order();
        assert_eq!(
            move_list(&session),
            " 1. You are at #1 (row: 2, col: 2)\n 0. Go to game start"
        );
    }

    #[test]
    fn test_screen_hides_move_list_when_disabled() {
        let settings = Settings::from_toml("show_move_list = false").unwrap();
        let text = screen(&Session::new(), &settings);
        assert!(text.contains("Next player: X"));
        assert!(!text.contains("Moves"));

        let text = screen(&Session::with_order(MoveOrder::Descending), &Settings::default());
        assert!(text.contains("Moves (descending):"));
    }
}
