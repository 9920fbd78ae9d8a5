#[cfg(test)]
mod tests {
    use crate::core::{Board, Cell, Move, PlayerId, Position};
    use crate::logic::{check_winner, is_valid_move, place_token};

    fn place(board: &Board, row: usize, col: usize, player: PlayerId) -> Board {
        place_token(board, &Move::new(Position::new(row, col), player))
    }

    #[test]
    fn test_valid_move_on_every_empty_cell() {
        let board = Board::new(5, 5).unwrap();
        for row in 0..5 {
            for col in 0..5 {
                assert!(is_valid_move(&board, row, col), "({row}, {col})");
            }
        }
    }

    #[test]
    fn test_invalid_move_out_of_bounds() {
        let board = Board::new(5, 5).unwrap();
        assert!(!is_valid_move(&board, 5, 0));
        assert!(!is_valid_move(&board, 0, 5));
        assert!(!is_valid_move(&board, -1, 0));
        assert!(!is_valid_move(&board, 0, -1));
        assert!(!is_valid_move(&board, i64::MAX, i64::MIN));
    }

    #[test]
    fn test_invalid_move_occupied() {
        let board = place(&Board::new(5, 5).unwrap(), 2, 3, PlayerId::Player1);
        assert!(!is_valid_move(&board, 2, 3));
        assert!(is_valid_move(&board, 3, 2));
    }

    #[test]
    fn test_place_token_changes_only_target_cell() {
        let before = place(&Board::new(4, 3).unwrap(), 0, 0, PlayerId::Player2);
        let after = place(&before, 3, 1, PlayerId::Player1);

        for row in 0..4 {
            for col in 0..3 {
                let pos = Position::new(row, col);
                if pos == Position::new(3, 1) {
                    assert_eq!(after.get(pos), Cell::Occupied(PlayerId::Player1));
                } else {
                    assert_eq!(after.get(pos), before.get(pos));
                }
            }
        }
        // input board is untouched
        assert_eq!(before.get(Position::new(3, 1)), Cell::Empty);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_place_token_on_occupied_cell_asserts() {
        let board = place(&Board::new(5, 5).unwrap(), 1, 1, PlayerId::Player1);
        place(&board, 1, 1, PlayerId::Player2);
    }

    #[test]
    fn test_four_in_row_wins() {
        let mut board = Board::new(5, 5).unwrap();
        for col in 0..4 {
            board = place(&board, 0, col, PlayerId::Player2);
        }
        assert!(check_winner(&board, Position::new(0, 3), PlayerId::Player2));
    }

    #[test]
    fn test_four_in_column_wins() {
        let mut board = Board::new(5, 5).unwrap();
        for row in 1..5 {
            board = place(&board, row, 2, PlayerId::Player1);
        }
        assert!(check_winner(&board, Position::new(4, 2), PlayerId::Player1));
    }

    #[test]
    fn test_four_need_not_be_contiguous() {
        // the rule counts tokens in the line, gaps allowed
        let mut board = Board::new(5, 5).unwrap();
        for col in [0, 1, 3, 4] {
            board = place(&board, 2, col, PlayerId::Player1);
        }
        board = place(&board, 2, 2, PlayerId::Player2);
        assert!(check_winner(&board, Position::new(2, 4), PlayerId::Player1));
    }

    #[test]
    fn test_five_in_row_is_not_a_win() {
        let mut board = Board::new(5, 5).unwrap();
        for col in 0..5 {
            board = place(&board, 0, col, PlayerId::Player2);
        }
        assert!(!check_winner(&board, Position::new(0, 4), PlayerId::Player2));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let mut board = Board::new(5, 5).unwrap();
        for row in 0..3 {
            board = place(&board, row, 0, PlayerId::Player1);
        }
        assert!(!check_winner(&board, Position::new(2, 0), PlayerId::Player1));
    }

    #[test]
    fn test_opponent_tokens_do_not_count() {
        let mut board = Board::new(5, 5).unwrap();
        for col in 0..4 {
            board = place(&board, 1, col, PlayerId::Player1);
        }
        assert!(!check_winner(&board, Position::new(1, 3), PlayerId::Player2));
    }

    #[test]
    fn test_diagonal_is_not_a_win() {
        let mut board = Board::new(5, 5).unwrap();
        for i in 0..4 {
            board = place(&board, i, i, PlayerId::Player1);
        }
        assert!(!check_winner(&board, Position::new(3, 3), PlayerId::Player1));
    }

    #[test]
    fn test_only_last_move_lines_are_inspected() {
        let mut board = Board::new(5, 5).unwrap();
        for col in 0..4 {
            board = place(&board, 0, col, PlayerId::Player1);
        }
        board = place(&board, 4, 4, PlayerId::Player1);
        // row 4 and column 4 hold one token each
        assert!(!check_winner(&board, Position::new(4, 4), PlayerId::Player1));
    }
}
