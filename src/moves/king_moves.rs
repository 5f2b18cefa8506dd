use crate::game_state::board_geometry::Geometry;
use crate::game_state::board_types::{
    file_of, occupied_by, piece_color, rank_of, square_at, PieceCode, Square,
};
use crate::moves::move_codec::{encode_move, Move};

const DX: [i32; 8] = [1, 1, 1, 0, 0, -1, -1, -1];
const DY: [i32; 8] = [1, 0, -1, 1, -1, 1, 0, -1];

/// King moves in a generation frame: one step in any of the eight
/// directions. Unlike every other piece, the king may travel against the
/// direction of play.
pub fn king_moves(p0: Square, board: &[PieceCode; 64], geo: &Geometry, out: &mut Vec<Move>) {
    let Some(color) = piece_color(board[p0 as usize]) else {
        return;
    };
    let x = file_of(p0) as i32;
    let y = rank_of(p0) as i32;

    for (dx, dy) in DX.iter().zip(DY.iter()) {
        if !geo.in_board(x + dx, y + dy) {
            continue;
        }
        let p1 = square_at((x + dx) as u8, (y + dy) as u8);
        if !occupied_by(board, p1, color) {
            out.push(encode_move(p0, p1, None));
        }
    }
}
