//! Shared vocabulary for the Rollerball engine.
//!
//! Defines the packed piece encoding used by the four orientation arrays,
//! the square index convention, the three board shapes, and the fixed
//! per-side piece-slot table.

/// Board square index on an 8-wide grid (`rank * 8 + file`). The 7x3 shape
/// occupies the 7x7 sub-grid; file 7 and rank 7 are never playable there.
pub type Square = u8;

/// Sentinel slot value meaning "captured / not on any board".
pub const DEAD: Square = 0xFF;

/// Packed piece value stored in the orientation arrays: one side bit plus
/// one kind bit, or `EMPTY`.
pub type PieceCode = u8;

pub const EMPTY: PieceCode = 0;
pub const PAWN: PieceCode = 1 << 1;
pub const ROOK: PieceCode = 1 << 2;
pub const KING: PieceCode = 1 << 3;
pub const BISHOP: PieceCode = 1 << 4;
pub const KNIGHT: PieceCode = 1 << 5;
pub const WHITE: PieceCode = 1 << 6;
pub const BLACK: PieceCode = 1 << 7;

const SIDE_BITS: PieceCode = WHITE | BLACK;
const KIND_BITS: PieceCode = PAWN | ROOK | KING | BISHOP | KNIGHT;

/// Side to move. White is the first mover on every shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The side bit used in packed piece codes.
    #[inline]
    pub const fn code(self) -> PieceCode {
        match self {
            Color::White => WHITE,
            Color::Black => BLACK,
        }
    }
}

/// Piece kind (side is represented separately in the packed code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    King,
    Bishop,
    Knight,
}

impl PieceKind {
    /// The kind bit used in packed piece codes.
    #[inline]
    pub const fn code(self) -> PieceCode {
        match self {
            PieceKind::Pawn => PAWN,
            PieceKind::Rook => ROOK,
            PieceKind::King => KING,
            PieceKind::Bishop => BISHOP,
            PieceKind::Knight => KNIGHT,
        }
    }
}

/// One of the three fixed ring-shaped playing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardShape {
    SevenThree,
    EightFour,
    EightTwo,
}

/// Piece slots per side. Slot order is fixed; shapes that field fewer
/// pieces leave the unused slots `DEAD`.
pub const SLOTS_PER_SIDE: usize = 10;

/// Index of the king slot within [`SLOT_KINDS`].
pub const KING_SLOT: usize = 2;

/// The piece kind originally occupying each slot. Promotion changes the
/// packed code on the boards but never the slot's kind, so undo can
/// restore the pre-promotion piece.
pub const SLOT_KINDS: [PieceKind; SLOTS_PER_SIDE] = [
    PieceKind::Rook,
    PieceKind::Rook,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Knight,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
    PieceKind::Pawn,
];

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 7
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 3
}

#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    color.code() | kind.code()
}

/// Side owning a packed piece code, or `None` for `EMPTY`.
#[inline]
pub fn piece_color(code: PieceCode) -> Option<Color> {
    match code & SIDE_BITS {
        WHITE => Some(Color::White),
        BLACK => Some(Color::Black),
        _ => None,
    }
}

/// Kind of a packed piece code, or `None` for `EMPTY`.
#[inline]
pub fn piece_kind(code: PieceCode) -> Option<PieceKind> {
    match code & KIND_BITS {
        PAWN => Some(PieceKind::Pawn),
        ROOK => Some(PieceKind::Rook),
        KING => Some(PieceKind::King),
        BISHOP => Some(PieceKind::Bishop),
        KNIGHT => Some(PieceKind::Knight),
        _ => None,
    }
}

/// True if the square holds a piece of the given side.
#[inline]
pub fn occupied_by(board: &[PieceCode; 64], square: Square, color: Color) -> bool {
    board[square as usize] & color.code() != 0
}
