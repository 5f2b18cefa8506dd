//! Pseudolegal move generation.
//!
//! Every piece travels clockwise around the ring, so each quadrant of the
//! board sees the same movement pattern rotated a quarter turn. Rather than
//! write four variants of every piece rule, generation runs in the rotated
//! frame where the piece's quadrant becomes the bottom band and clockwise
//! travel reads as "leftward": the piece's square is mapped into that frame,
//! moves are generated against the matching orientation array, and the
//! endpoints are mapped back through the inverse transform table.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{piece_color, piece_kind, Color, PieceKind, Square, EMPTY};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::move_codec::{encode_move, move_promotion, move_to, Move};
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::rook_moves::rook_moves;

/// Pseudolegal moves for the piece on `square`; empty if the square is
/// empty. Results come back in canonical coordinates, sorted and
/// deduplicated.
pub fn pseudolegal_moves_for_piece(state: &BoardState, square: Square) -> Vec<Move> {
    let code = state.piece_at(square);
    if code == EMPTY {
        return Vec::new();
    }
    let geo = state.geometry;
    let j = geo.generation_orientation(square);
    let local = geo.transform[j][square as usize];
    let board = &state.boards[j];

    let mut frame_moves = Vec::new();
    match piece_kind(code) {
        Some(PieceKind::Pawn) => {
            // Pawns promote only in the quadrant holding the far side's
            // home band.
            let promote = match piece_color(code) {
                Some(Color::White) => j == 2,
                Some(Color::Black) => j == 0,
                None => false,
            };
            pawn_moves(local, board, geo, promote, &mut frame_moves);
        }
        Some(PieceKind::Rook) => rook_moves(local, board, geo, &mut frame_moves),
        Some(PieceKind::King) => king_moves(local, board, geo, &mut frame_moves),
        Some(PieceKind::Bishop) => bishop_moves(local, board, geo, &mut frame_moves),
        Some(PieceKind::Knight) => knight_moves(local, board, geo, &mut frame_moves),
        None => {}
    }

    let mut moves: Vec<Move> = frame_moves
        .into_iter()
        .map(|m| {
            let to = geo.inverse[j][move_to(m) as usize];
            encode_move(square, to, move_promotion(m))
        })
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Pseudolegal moves for every live piece of one side.
pub fn pseudolegal_moves_for_side(state: &BoardState, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (_, square) in state.live_pieces(color) {
        moves.extend(pseudolegal_moves_for_piece(state, square));
    }
    moves
}

/// Pseudolegal moves for the side to move.
pub fn pseudolegal_moves(state: &BoardState) -> Vec<Move> {
    pseudolegal_moves_for_side(state, state.side_to_move)
}
