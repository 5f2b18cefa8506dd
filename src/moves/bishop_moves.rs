use crate::game_state::board_geometry::Geometry;
use crate::game_state::board_types::{
    file_of, occupied_by, piece_color, rank_of, square_at, Color, PieceCode, Square,
};
use crate::moves::move_codec::{encode_move, Move};

/// Bishop moves in a generation frame.
///
/// The two rightward diagonals are single backward steps. The up-left
/// diagonal slides and, when it leaves the board unblocked, reflects off
/// the rim: up-right from the left edge, down-left otherwise. The down-left
/// diagonal slides and reflects up-left off the bottom rim.
pub fn bishop_moves(p0: Square, board: &[PieceCode; 64], geo: &Geometry, out: &mut Vec<Move>) {
    let Some(color) = piece_color(board[p0 as usize]) else {
        return;
    };
    let x = file_of(p0) as i32;
    let y = rank_of(p0) as i32;

    // top right - one square
    if geo.in_board(x + 1, y + 1) {
        let p1 = square_at((x + 1) as u8, (y + 1) as u8);
        if !occupied_by(board, p1, color) {
            out.push(encode_move(p0, p1, None));
        }
    }

    // bottom right - one square
    if geo.in_board(x + 1, y - 1) {
        let p1 = square_at((x + 1) as u8, (y - 1) as u8);
        if !occupied_by(board, p1, color) {
            out.push(encode_move(p0, p1, None));
        }
    }

    // top left - slide until the rim, then reflect
    let run = diagonal_slide(p0, x, y, -1, 1, board, geo, color, out);
    if !run.blocked {
        if let Some((ex, ey)) = run.last {
            if ex == 0 {
                // left edge: bounce up-right
                diagonal_slide(p0, ex, ey, 1, 1, board, geo, color, out);
            } else {
                // top edge: bounce down-left
                diagonal_slide(p0, ex, ey, -1, -1, board, geo, color, out);
            }
        }
    }

    // bottom left - slide until the rim, then reflect up-left
    let run = diagonal_slide(p0, x, y, -1, -1, board, geo, color, out);
    if !run.blocked {
        if let Some((ex, ey)) = run.last {
            diagonal_slide(p0, ex, ey, -1, 1, board, geo, color, out);
        }
    }
}

struct SlideEnd {
    /// The slide ended on a piece rather than the rim.
    blocked: bool,
    /// Last square the slide visited, if it advanced at all.
    last: Option<(i32, i32)>,
}

/// Slide diagonally from (not including) the given origin, emitting moves
/// rooted at `p0`. Own pieces block; enemy pieces are captured and block.
#[allow(clippy::too_many_arguments)]
fn diagonal_slide(
    p0: Square,
    from_x: i32,
    from_y: i32,
    dx: i32,
    dy: i32,
    board: &[PieceCode; 64],
    geo: &Geometry,
    color: Color,
    out: &mut Vec<Move>,
) -> SlideEnd {
    let opp = color.opposite();
    let mut end = SlideEnd {
        blocked: false,
        last: None,
    };
    let mut s = 1;
    while geo.in_board(from_x + s * dx, from_y + s * dy) {
        let (tx, ty) = (from_x + s * dx, from_y + s * dy);
        let p1 = square_at(tx as u8, ty as u8);
        if occupied_by(board, p1, color) {
            end.blocked = true;
            break;
        }
        out.push(encode_move(p0, p1, None));
        end.last = Some((tx, ty));
        if occupied_by(board, p1, opp) {
            end.blocked = true;
            break;
        }
        s += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_geometry::GEOMETRY_SEVEN_THREE;
    use crate::game_state::board_types::{piece_code, PieceKind, EMPTY};
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
        out.dedup();
        out
    }

    #[test]
    fn bishop_reflects_off_the_left_edge() {
        let geo = &GEOMETRY_SEVEN_THREE;
        let from = square_at(2, 0);
        let board = board_with(&[(from, piece_code(Color::White, PieceKind::Bishop))]);

        let mut moves = Vec::new();
        bishop_moves(from, &board, geo, &mut moves);

        // Up-left runs (1,1), (0,2), then bounces up-right to (1,3); the
        // next bounce square (2,4) is the hole. Top-right single step (3,1).
        let mut expected = vec![
            square_at(3, 1),
            square_at(1, 1),
            square_at(0, 2),
            square_at(1, 3),
        ];
        expected.sort_unstable();
        assert_eq!(dests(&moves), expected);
    }

    #[test]
    fn bishop_bounces_down_left_when_the_run_ends_off_the_edge() {
        let geo = &GEOMETRY_SEVEN_THREE;
        let from = square_at(5, 0);
        let board = board_with(&[(from, piece_code(Color::White, PieceKind::Bishop))]);

        let mut moves = Vec::new();
        bishop_moves(from, &board, geo, &mut moves);

        // Up-left stops after (4,1) because (3,2) is the hole; the bounce
        // continues down-left to (3,0). Top-right single step (6,1).
        let mut expected = vec![square_at(6, 1), square_at(4, 1), square_at(3, 0)];
        expected.sort_unstable();
        assert_eq!(dests(&moves), expected);
    }

    #[test]
    fn bishop_reflects_up_left_off_the_bottom_rim() {
        let geo = &GEOMETRY_SEVEN_THREE;
        let from = square_at(6, 2);
        let board = board_with(&[(from, piece_code(Color::Black, PieceKind::Bishop))]);

        let mut moves = Vec::new();
        bishop_moves(from, &board, geo, &mut moves);
        let dests = dests(&moves);

        // Down-left runs (5,1), (4,0); off the rim it bounces up-left from
        // (4,0): (3,1) then (2,2) is the hole.
        assert!(dests.contains(&square_at(5, 1)));
        assert!(dests.contains(&square_at(4, 0)));
        assert!(dests.contains(&square_at(3, 1)));
        assert!(!dests.contains(&square_at(2, 2)));
    }

    #[test]
    fn capture_ends_the_run_without_reflecting() {
        let geo = &GEOMETRY_SEVEN_THREE;
        let from = square_at(2, 0);
        let board = board_with(&[
            (from, piece_code(Color::White, PieceKind::Bishop)),
            (square_at(0, 2), piece_code(Color::Black, PieceKind::Pawn)),
        ]);

        let mut moves = Vec::new();
        bishop_moves(from, &board, geo, &mut moves);
        let dests = dests(&moves);

        assert!(dests.contains(&square_at(0, 2)));
        assert!(!dests.contains(&square_at(1, 3)));
    }

    #[test]
    fn own_piece_blocks_before_the_rim() {
        let geo = &GEOMETRY_SEVEN_THREE;
        let from = square_at(2, 0);
        let board = board_with(&[
            (from, piece_code(Color::White, PieceKind::Bishop)),
            (square_at(1, 1), piece_code(Color::White, PieceKind::Pawn)),
        ]);

        let mut moves = Vec::new();
        bishop_moves(from, &board, geo, &mut moves);
        let dests = dests(&moves);

        assert!(!dests.contains(&square_at(1, 1)));
        assert!(!dests.contains(&square_at(0, 2)));
        assert!(!dests.contains(&square_at(1, 3)));
    }
}
