//! Core mutable board representation.
//!
//! `BoardState` is the central model for the engine. It stores the twenty
//! piece slots, the four synchronized orientation arrays, the side to move,
//! and the single-move undo bookkeeping used by make/unmake workflows.
//!
//! Invariant: for every canonical square `s` and orientation `k`,
//! `boards[k][transform[k][s]] == boards[0][s]`. Every public mutation
//! preserves this; `orientations_consistent` checks it directly.

use crate::game_state::board_geometry::{geometry_for, Geometry, ORIENTATIONS};
use crate::game_state::board_types::*;
use crate::game_state::undo_record::UndoRecord;

/// Mutable game position for one Rollerball game.
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Slot squares per side, `[white, black]`; `DEAD` when captured or
    /// unfielded. Slot kinds are fixed by [`SLOT_KINDS`].
    pub slots: [[Square; SLOTS_PER_SIDE]; 2],
    /// The same logical position rotated 0/90/180/270 degrees clockwise.
    pub boards: [[PieceCode; 64]; ORIENTATIONS],
    pub side_to_move: Color,
    /// Armed by `apply_move_keep_turn`, consumed by the matching undo.
    pub pending_undo: Option<UndoRecord>,
    pub geometry: &'static Geometry,
}

impl BoardState {
    /// Fresh game on the given shape, White to move.
    pub fn new(shape: BoardShape) -> Self {
        let geometry = geometry_for(shape);
        let mut state = Self {
            slots: geometry.initial_slots,
            boards: [[EMPTY; 64]; ORIENTATIONS],
            side_to_move: Color::White,
            pending_undo: None,
            geometry,
        };
        state.sync_boards_from_slots();
        state
    }

    /// Board with no pieces on it. Tests and position setup place pieces
    /// through [`BoardState::place_piece`].
    pub fn empty(shape: BoardShape) -> Self {
        Self {
            slots: [[DEAD; SLOTS_PER_SIDE]; 2],
            boards: [[EMPTY; 64]; ORIENTATIONS],
            side_to_move: Color::White,
            pending_undo: None,
            geometry: geometry_for(shape),
        }
    }

    /// Put the piece belonging to `slot` on `square`, updating all four
    /// orientation arrays. The slot must currently be `DEAD` and the square
    /// empty and playable.
    pub fn place_piece(&mut self, color: Color, slot: usize, square: Square) {
        debug_assert!(self.slots[color.index()][slot] == DEAD);
        debug_assert!(self.boards[0][square as usize] == EMPTY);
        debug_assert!(self.geometry.mask[square as usize] != 0);
        self.slots[color.index()][slot] = square;
        let code = piece_code(color, SLOT_KINDS[slot]);
        self.write_all_orientations(square, code);
    }

    /// Packed piece code on a canonical square.
    #[inline]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.boards[0][square as usize]
    }

    #[inline]
    pub fn shape(&self) -> BoardShape {
        self.geometry.shape
    }

    /// The king's square for a side, `DEAD` if it has been captured.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.slots[color.index()][KING_SLOT]
    }

    /// Live `(slot, square)` pairs for one side.
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = (usize, Square)> + '_ {
        self.slots[color.index()]
            .into_iter()
            .enumerate()
            .filter(|(_, sq)| *sq != DEAD)
    }

    /// Write one square's piece code through all four orientation arrays.
    #[inline]
    pub fn write_all_orientations(&mut self, square: Square, code: PieceCode) {
        for k in 0..ORIENTATIONS {
            self.boards[k][self.geometry.transform[k][square as usize] as usize] = code;
        }
    }

    /// True if the four orientation arrays agree on every square.
    pub fn orientations_consistent(&self) -> bool {
        for sq in 0..64usize {
            let canonical = self.boards[0][sq];
            for k in 1..ORIENTATIONS {
                if self.boards[k][self.geometry.transform[k][sq] as usize] != canonical {
                    return false;
                }
            }
        }
        true
    }

    fn sync_boards_from_slots(&mut self) {
        for color in [Color::White, Color::Black] {
            for (slot, kind) in SLOT_KINDS.iter().enumerate() {
                let sq = self.slots[color.index()][slot];
                if sq == DEAD {
                    continue;
                }
                self.boards[0][sq as usize] = piece_code(color, *kind);
            }
        }
        for k in 1..ORIENTATIONS {
            for sq in 0..64usize {
                self.boards[k][self.geometry.transform[k][sq] as usize] = self.boards[0][sq];
            }
        }
    }
}

/// Position equality: slots, boards, and turn. The transient undo
/// bookkeeping is deliberately excluded.
impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.side_to_move == other.side_to_move
            && self.slots == other.slots
            && self.boards == other.boards
    }
}

impl Eq for BoardState {}
