//! Applying and retracting moves.
//!
//! The make/unmake pair works on the slot table and replays each change
//! through all four orientation arrays. Apply and undo come in keep-turn
//! variants so legality testing can probe a position without disturbing the
//! side to move; `apply_move` is the keep-turn apply plus a turn flip.
//!
//! Undo depth is exactly one: each keep-turn apply arms the undo record and
//! the matching undo consumes it. Callers needing deeper history clone the
//! state instead.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{piece_code, Color, PieceKind, BLACK, DEAD, EMPTY, WHITE};
use crate::game_state::undo_record::{CapturedPiece, UndoRecord};
use crate::moves::move_codec::{move_from, move_promotion, move_to, Move, Promotion};

/// Apply a pseudolegal move without changing the side to move. Arms the
/// undo record consumed by [`undo_last_move_keep_turn`].
pub fn apply_move_keep_turn(state: &mut BoardState, mv: Move) {
    let p0 = move_from(mv);
    let p1 = move_to(mv);
    let mut piece = state.piece_at(p0);
    debug_assert!(piece != EMPTY, "apply on an empty square");

    let mut captured = None;
    for color in [Color::White, Color::Black] {
        for slot in 0..state.slots[color.index()].len() {
            if state.slots[color.index()][slot] == p1 {
                captured = Some(CapturedPiece {
                    color,
                    slot,
                    piece: state.piece_at(p1),
                });
                state.slots[color.index()][slot] = DEAD;
            } else if state.slots[color.index()][slot] == p0 {
                state.slots[color.index()][slot] = p1;
            }
        }
    }

    match move_promotion(mv) {
        Some(Promotion::Rook) => piece = (piece & (WHITE | BLACK)) | PieceKind::Rook.code(),
        Some(Promotion::Bishop) => piece = (piece & (WHITE | BLACK)) | PieceKind::Bishop.code(),
        None => {}
    }

    state.write_all_orientations(p1, piece);
    state.write_all_orientations(p0, EMPTY);
    state.pending_undo = Some(UndoRecord { captured });
}

/// Apply a pseudolegal move and pass the turn to the opponent.
pub fn apply_move(state: &mut BoardState, mv: Move) {
    apply_move_keep_turn(state, mv);
    flip_turn(state);
}

#[inline]
pub fn flip_turn(state: &mut BoardState) {
    state.side_to_move = state.side_to_move.opposite();
}

/// Retract the move armed by the last [`apply_move_keep_turn`]. Undoing
/// with no pending apply is a caller bug.
pub fn undo_last_move_keep_turn(state: &mut BoardState, mv: Move) {
    let record = state.pending_undo.take();
    debug_assert!(record.is_some(), "undo without a matching apply");
    let captured = record.and_then(|r| r.captured);

    let p0 = move_from(mv);
    let p1 = move_to(mv);
    let mut piece = state.piece_at(p1);
    debug_assert!(piece != EMPTY, "undo from an empty square");

    'mover: for color in [Color::White, Color::Black] {
        for slot in 0..state.slots[color.index()].len() {
            if state.slots[color.index()][slot] == p1 {
                state.slots[color.index()][slot] = p0;
                break 'mover;
            }
        }
    }

    if move_promotion(mv).is_some() {
        piece = (piece & (WHITE | BLACK)) | PieceKind::Pawn.code();
    }

    state.write_all_orientations(p0, piece);
    match captured {
        Some(c) => {
            state.slots[c.color.index()][c.slot] = p1;
            state.write_all_orientations(p1, c.piece);
        }
        None => state.write_all_orientations(p1, EMPTY),
    }
}
