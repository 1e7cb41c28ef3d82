use tablut_types::Color;

use crate::board::NumericBoard;

/// Immutable game snapshot handed to the move oracle.
///
/// Passed by value so the oracle works on its own copy and cannot reach the
/// session's live state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: NumericBoard,
    pub turn: Color,
}

impl GameSnapshot {
    pub fn new(board: NumericBoard, turn: Color) -> Self {
        Self { board, turn }
    }
}
