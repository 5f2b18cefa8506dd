//! Plain-text board rendering for the console driver and debugging.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{
    piece_color, piece_kind, square_at, Color, PieceCode, PieceKind, EMPTY,
};

/// One-character rendering of a packed piece code. White pieces are
/// uppercase, empty is `None`.
pub fn piece_to_char(code: PieceCode) -> Option<char> {
    let kind = piece_kind(code)?;
    let ch = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'r',
        PieceKind::King => 'k',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
    };
    match piece_color(code) {
        Some(Color::White) => Some(ch.to_ascii_uppercase()),
        _ => Some(ch),
    }
}

/// Render the position top rank first, one row per line. Empty ring
/// squares are `.`, the central hole is blank.
pub fn render_board(state: &BoardState) -> String {
    let grid = state.geometry.grid;
    let mut text = String::with_capacity((grid as usize + 1) * grid as usize);
    for rank in (0..grid).rev() {
        for file in 0..grid {
            if !state.geometry.in_board(file as i32, rank as i32) {
                text.push(' ');
                continue;
            }
            let code = state.piece_at(square_at(file, rank));
            match piece_to_char(code) {
                Some(ch) => text.push(ch),
                None => {
                    debug_assert_eq!(code, EMPTY);
                    text.push('.');
                }
            }
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::{piece_code, BoardShape};

    #[test]
    fn seven_three_opening_renders_both_camps() {
        let state = BoardState::new(BoardShape::SevenThree);
        let rendered = render_board(&state);
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            rows,
            vec![
                "..rbp..",
                "..rkp..",
                "..   ..",
                "..   ..",
                "..   ..",
                "..PKR..",
                "..PBR..",
            ]
        );
    }

    #[test]
    fn eight_two_opening_renders_knights() {
        let state = BoardState::new(BoardShape::EightTwo);
        let render = render_board(&state);
        assert!(render.contains('N'));
        assert!(render.contains('n'));
        assert_eq!(render.lines().count(), 8);
        assert!(render.lines().all(|row| row.len() == 8));
    }

    #[test]
    fn piece_chars_cover_every_kind_and_side() {
        assert_eq!(
            piece_to_char(piece_code(Color::White, PieceKind::Knight)),
            Some('N')
        );
        assert_eq!(
            piece_to_char(piece_code(Color::Black, PieceKind::Pawn)),
            Some('p')
        );
        assert_eq!(piece_to_char(EMPTY), None);
    }
}
