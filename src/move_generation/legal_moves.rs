//! Check detection and the legality filter.
//!
//! A square is threatened if any opponent pseudolegal move lands on it; in
//! this variant every pawn advance can capture, so the pseudolegal set is
//! exactly the attack set. Legal moves are the pseudolegal moves that do
//! not leave the mover's own king threatened, found by probing each one
//! with a keep-turn apply/undo on a scratch copy.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Color, Square, DEAD};
use crate::move_generation::move_applier::{apply_move_keep_turn, undo_last_move_keep_turn};
use crate::move_generation::move_generator::{pseudolegal_moves, pseudolegal_moves_for_side};
use crate::moves::move_codec::{move_to, Move};

/// True if any piece of `by` has a pseudolegal move onto `square`.
pub fn under_threat(state: &BoardState, square: Square, by: Color) -> bool {
    pseudolegal_moves_for_side(state, by)
        .iter()
        .any(|mv| move_to(*mv) == square)
}

/// True if `color`'s king is threatened. A captured king is not in check;
/// the game is already decided.
pub fn in_check(state: &BoardState, color: Color) -> bool {
    let king = state.king_square(color);
    if king == DEAD {
        return false;
    }
    under_threat(state, king, color.opposite())
}

/// Legal moves for the side to move.
pub fn legal_moves(state: &BoardState) -> Vec<Move> {
    let mover = state.side_to_move;
    let mut probe = state.clone();
    pseudolegal_moves(state)
        .into_iter()
        .filter(|mv| {
            apply_move_keep_turn(&mut probe, *mv);
            let safe = !in_check(&probe, mover);
            undo_last_move_keep_turn(&mut probe, *mv);
            safe
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::{square_at, BoardShape, KING_SLOT};
    use crate::move_generation::move_applier::apply_move;
    use crate::moves::move_codec::move_to_text;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_shapes() -> [BoardShape; 3] {
        [
            BoardShape::SevenThree,
            BoardShape::EightFour,
            BoardShape::EightTwo,
        ]
    }

    #[test]
    fn opening_positions_are_not_in_check() {
        for shape in all_shapes() {
            let state = BoardState::new(shape);
            assert!(!in_check(&state, Color::White), "shape {shape:?}");
            assert!(!in_check(&state, Color::Black), "shape {shape:?}");
        }
    }

    #[test]
    fn seven_three_opening_legal_moves_match_pseudolegal() {
        // No opening move can expose the king, so the filter passes all
        // seven moves through.
        let state = BoardState::new(BoardShape::SevenThree);
        assert_eq!(legal_moves(&state), pseudolegal_moves(&state));
        assert_eq!(legal_moves(&state).len(), 7);
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudolegal() {
        for shape in all_shapes() {
            let state = BoardState::new(shape);
            let pseudo = pseudolegal_moves(&state);
            for mv in legal_moves(&state) {
                assert!(pseudo.contains(&mv), "shape {shape:?}");
            }
        }
    }

    #[test]
    fn king_in_check_must_resolve_it() {
        let mut state = BoardState::empty(BoardShape::SevenThree);
        state.place_piece(Color::White, KING_SLOT, square_at(3, 1));
        state.place_piece(Color::Black, 0, square_at(3, 0));

        assert!(in_check(&state, Color::White));

        // The rook covers (4,0), (2,0), and the reflected run up file a;
        // the king may capture it or sidestep to (4,1) or (2,1).
        let legal = legal_moves(&state);
        let mut texts: Vec<String> = legal.iter().map(|m| move_to_text(*m)).collect();
        texts.sort();
        assert_eq!(texts, vec!["d2c2", "d2d1", "d2e2"]);
    }

    #[test]
    fn pawn_advances_give_check() {
        let mut state = BoardState::empty(BoardShape::SevenThree);
        state.place_piece(Color::White, KING_SLOT, square_at(4, 1));
        state.place_piece(Color::Black, 6, square_at(5, 2));

        assert!(under_threat(&state, square_at(4, 1), Color::Black));
        assert!(in_check(&state, Color::White));
        assert!(!in_check(&state, Color::Black));
    }

    #[test]
    fn captured_king_is_not_in_check() {
        let mut state = BoardState::empty(BoardShape::SevenThree);
        state.place_piece(Color::Black, 0, square_at(3, 0));
        assert_eq!(state.king_square(Color::White), DEAD);
        assert!(!in_check(&state, Color::White));
    }

    #[test]
    fn random_playout_keeps_state_reversible() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for shape in all_shapes() {
            let mut state = BoardState::new(shape);
            for _ in 0..40 {
                let legal = legal_moves(&state);
                let Some(&mv) = legal.choose(&mut rng) else {
                    break;
                };

                let before = state.clone();
                apply_move_keep_turn(&mut state, mv);
                assert!(state.orientations_consistent());
                undo_last_move_keep_turn(&mut state, mv);
                assert_eq!(state, before);

                let mover = state.side_to_move;
                apply_move(&mut state, mv);
                assert!(state.orientations_consistent());
                assert!(!in_check(&state, mover));
            }
        }
    }
}
