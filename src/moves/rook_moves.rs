use crate::game_state::board_geometry::Geometry;
use crate::game_state::board_types::{
    file_of, occupied_by, piece_color, rank_of, square_at, PieceCode, Square,
};
use crate::moves::move_codec::{encode_move, Move};

/// Rook moves in a generation frame.
///
/// Rightward and downward are single backward steps. Upward is a full slide
/// on the leading half of the quadrant but a single step past the midpoint
/// file. Leftward is a full slide that, when it reaches the outer rim
/// unblocked from rank 0, reflects and continues upward along file 0.
pub fn rook_moves(p0: Square, board: &[PieceCode; 64], geo: &Geometry, out: &mut Vec<Move>) {
    let Some(color) = piece_color(board[p0 as usize]) else {
        return;
    };
    let opp = color.opposite();
    let x = file_of(p0) as i32;
    let y = rank_of(p0) as i32;

    // right - one square
    if geo.in_board(x + 1, y) {
        let p1 = square_at((x + 1) as u8, y as u8);
        if !occupied_by(board, p1, color) {
            out.push(encode_move(p0, p1, None));
        }
    }

    // bottom - one square
    if geo.in_board(x, y - 1) {
        let p1 = square_at(x as u8, (y - 1) as u8);
        if !occupied_by(board, p1, color) {
            out.push(encode_move(p0, p1, None));
        }
    }

    // top - slide on the leading half, one square on the trailing half
    if geo.in_board(x, y + 1) {
        if x >= geo.midpoint_file() {
            let p1 = square_at(x as u8, (y + 1) as u8);
            if !occupied_by(board, p1, color) {
                out.push(encode_move(p0, p1, None));
            }
        } else {
            let mut dy = 1;
            while geo.in_board(x, y + dy) {
                let p1 = square_at(x as u8, (y + dy) as u8);
                if occupied_by(board, p1, color) {
                    break;
                }
                out.push(encode_move(p0, p1, None));
                if occupied_by(board, p1, opp) {
                    break;
                }
                dy += 1;
            }
        }
    }

    // left
    let mut blocked = false;
    let mut dx = 1;
    while geo.in_board(x - dx, y) {
        let p1 = square_at((x - dx) as u8, y as u8);
        if occupied_by(board, p1, color) {
            blocked = true;
            break;
        }
        out.push(encode_move(p0, p1, None));
        if occupied_by(board, p1, opp) {
            blocked = true;
            break;
        }
        dx += 1;
    }

    // reflect off the rim and continue up file 0
    if !blocked && y == 0 {
        let mut dy = 1;
        while geo.in_board(0, dy) {
            let p1 = square_at(0, dy as u8);
            if occupied_by(board, p1, color) {
                break;
            }
            out.push(encode_move(p0, p1, None));
            if occupied_by(board, p1, opp) {
                break;
            }
            dy += 1;
        }
    }
}
