use crate::game_state::board_geometry::Geometry;
use crate::game_state::board_types::{
    file_of, occupied_by, piece_color, rank_of, square_at, PieceCode, Square,
};
use crate::moves::move_codec::{encode_move, Move, Promotion};

/// Pawn moves in a generation frame. Pawns advance along the negative-file
/// axis of the frame: the fan is the three squares one file to the left at
/// ranks y-1, y, y+1. When `promote` is set and a destination is one of the
/// shape's promotion squares, a rook promotion and a bishop promotion are
/// emitted instead of the plain move.
pub fn pawn_moves(
    p0: Square,
    board: &[PieceCode; 64],
    geo: &Geometry,
    promote: bool,
    out: &mut Vec<Move>,
) {
    let Some(color) = piece_color(board[p0 as usize]) else {
        return;
    };
    let x = file_of(p0) as i32;
    let rank = rank_of(p0) as i32;

    for y in (rank - 1)..=(rank + 1) {
        if !geo.in_board(x - 1, y) {
            continue;
        }
        let p1 = square_at((x - 1) as u8, y as u8);
        if occupied_by(board, p1, color) {
            continue;
        }
        if promote && geo.is_promo_square(p1) {
            out.push(encode_move(p0, p1, Some(Promotion::Rook)));
            out.push(encode_move(p0, p1, Some(Promotion::Bishop)));
        } else {
            out.push(encode_move(p0, p1, None));
        }
    }
}
