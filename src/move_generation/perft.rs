//! Legal move tree walk for validating the generator.
//!
//! Counts leaf positions at a fixed depth. Recursion clones the position
//! per node rather than stacking undo records, since the undo depth of a
//! board state is one move.

use crate::game_state::board_state::BoardState;
use crate::move_generation::legal_moves::legal_moves;
use crate::move_generation::move_applier::apply_move;

pub fn perft(state: &BoardState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let mut next = state.clone();
        apply_move(&mut next, mv);
        nodes += perft(&next, depth - 1);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::{square_at, BoardShape, Color};

    #[test]
    fn depth_zero_counts_the_position_itself() {
        let state = BoardState::new(BoardShape::EightFour);
        assert_eq!(perft(&state, 0), 1);
    }

    #[test]
    fn depth_one_matches_the_legal_move_count() {
        for shape in [
            BoardShape::SevenThree,
            BoardShape::EightFour,
            BoardShape::EightTwo,
        ] {
            let state = BoardState::new(shape);
            assert_eq!(
                perft(&state, 1),
                legal_moves(&state).len() as u64,
                "shape {shape:?}"
            );
        }
    }

    #[test]
    fn lone_rook_on_the_rim_counts_its_reflected_run() {
        let mut state = BoardState::empty(BoardShape::SevenThree);
        state.place_piece(Color::White, 0, square_at(3, 0));
        // Right, up, three squares left, and the six-square reflected run.
        assert_eq!(perft(&state, 1), 11);
    }

    #[test]
    fn seven_three_opening_depth_two() {
        // The sides open in disjoint quadrants: each of White's seven
        // openers leaves Black the same seven replies.
        let state = BoardState::new(BoardShape::SevenThree);
        assert_eq!(perft(&state, 2), 49);
    }
}
