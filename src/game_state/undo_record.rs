use crate::game_state::board_types::{Color, PieceCode};

/// Bookkeeping armed by every keep-turn apply and consumed by the matching
/// undo. Only one record exists at a time: the undo protocol supports
/// exactly one level of reversal, immediately after the apply that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoRecord {
    /// The piece removed from the destination square, if the move captured.
    pub captured: Option<CapturedPiece>,
}

/// Identity of a captured piece: which slot held it and its packed code at
/// capture time (the code may be a promoted rook or bishop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedPiece {
    pub color: Color,
    pub slot: usize,
    pub piece: PieceCode,
}
