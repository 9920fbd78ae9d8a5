/// Parsed form of a move line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Coordinates { row: i64, col: i64 },
    Malformed,
}

/// Exactly two whitespace-separated integers, e.g. `"2 3"`. Anything else is
/// `Malformed`. Range checking is left to `is_valid_move`.
pub fn parse_move_input(line: &str) -> MoveInput {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => MoveInput::Coordinates { row, col },
            _ => MoveInput::Malformed,
        },
        _ => MoveInput::Malformed,
    }
}
