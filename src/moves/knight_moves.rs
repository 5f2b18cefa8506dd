use crate::game_state::board_geometry::Geometry;
use crate::game_state::board_types::{
    file_of, occupied_by, piece_color, rank_of, square_at, PieceCode, Square,
};
use crate::moves::move_codec::{encode_move, Move};

const DX: [i32; 8] = [1, 2, 2, 1, -1, -2, -2, -1];
const DY: [i32; 8] = [2, 1, -1, -2, -2, -1, 1, 2];

/// Knight moves in a generation frame. The knight jumps like a standard
/// chess knight; the hole and the rim simply clip its targets.
pub fn knight_moves(p0: Square, board: &[PieceCode; 64], geo: &Geometry, out: &mut Vec<Move>) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_geometry::GEOMETRY_EIGHT_TWO;
    use crate::game_state::board_types::{piece_code, Color, PieceKind, EMPTY};
    use crate::moves::move_codec::move_to;

    fn board_with(pieces: &[(Square, PieceCode)]) -> [PieceCode; 64] {
        let mut board = [EMPTY; 64];
        for (sq, code) in pieces {
            board[*sq as usize] = *code;
        }
        board
    }

    fn dests(moves: &[Move]) -> Vec<Square> {
        let mut out: Vec<Square> = moves.iter().map(|m| move_to(*m)).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn knight_jumps_are_clipped_by_the_hole_and_the_rim() {
        let geo = &GEOMETRY_EIGHT_TWO;
        let from = square_at(3, 1);
        let board = board_with(&[(from, piece_code(Color::White, PieceKind::Knight))]);

        let mut moves = Vec::new();
        knight_moves(from, &board, geo, &mut moves);

        // (4,3) lands in the hole, (4,-1) and (2,-1) fall off the rim.
        let mut expected = vec![
            square_at(5, 2),
            square_at(5, 0),
            square_at(1, 0),
            square_at(1, 2),
            square_at(2, 3),
        ];
        expected.sort_unstable();
        assert_eq!(dests(&moves), expected);
    }

    #[test]
    fn knight_captures_enemies_and_skips_own_pieces() {
        let geo = &GEOMETRY_EIGHT_TWO;
        let from = square_at(3, 1);
        let board = board_with(&[
            (from, piece_code(Color::White, PieceKind::Knight)),
            (square_at(5, 2), piece_code(Color::Black, PieceKind::Pawn)),
            (square_at(1, 0), piece_code(Color::White, PieceKind::Pawn)),
        ]);

        let mut moves = Vec::new();
        knight_moves(from, &board, geo, &mut moves);
        let dests = dests(&moves);

        assert!(dests.contains(&square_at(5, 2)));
        assert!(!dests.contains(&square_at(1, 0)));
        assert_eq!(dests.len(), 4);
    }
}
