//! Packed move encoding and algebraic text conversion.
//!
//! A move is a `u16`: source square in bits 0-5, destination in bits 6-11,
//! promotion code in bits 12-13. The all-zero value is reserved for the
//! null move (no piece can move onto its own square, so `a1a1` never
//! collides with it).

use std::error::Error;
use std::fmt;

use crate::game_state::board_types::{file_of, rank_of, square_at, Square};

pub type Move = u16;

/// The null move, rendered as the literal `"0000"`.
pub const NULL_MOVE: Move = 0;

const FROM_SHIFT: u16 = 0;
const TO_SHIFT: u16 = 6;
const PROMO_SHIFT: u16 = 12;
const SQUARE_MASK: u16 = 0x3F;
const PROMO_MASK: u16 = 0x3;

const PROMO_NONE: u16 = 0;
const PROMO_ROOK: u16 = 1;
const PROMO_BISHOP: u16 = 2;

/// Pawn promotion choice carried by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    Rook,
    Bishop,
}

#[inline]
pub fn encode_move(from: Square, to: Square, promotion: Option<Promotion>) -> Move {
    let promo_code = match promotion {
        None => PROMO_NONE,
        Some(Promotion::Rook) => PROMO_ROOK,
        Some(Promotion::Bishop) => PROMO_BISHOP,
    };
    ((from as u16) << FROM_SHIFT) | ((to as u16) << TO_SHIFT) | (promo_code << PROMO_SHIFT)
}

#[inline]
pub fn move_from(mv: Move) -> Square {
    ((mv >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_to(mv: Move) -> Square {
    ((mv >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_promotion(mv: Move) -> Option<Promotion> {
    match (mv >> PROMO_SHIFT) & PROMO_MASK {
        PROMO_ROOK => Some(Promotion::Rook),
        PROMO_BISHOP => Some(Promotion::Bishop),
        _ => None,
    }
}

/// Render a move as `<file><rank><file><rank>[r|b]`; the null move is
/// `"0000"`.
pub fn move_to_text(mv: Move) -> String {
    if mv == NULL_MOVE {
        return "0000".to_owned();
    }

    let from = move_from(mv);
    let to = move_to(mv);
    let mut text = String::with_capacity(5);
    text.push(char::from(b'a' + file_of(from)));
    text.push(char::from(b'1' + rank_of(from)));
    text.push(char::from(b'a' + file_of(to)));
    text.push(char::from(b'1' + rank_of(to)));
    match move_promotion(mv) {
        Some(Promotion::Rook) => text.push('r'),
        Some(Promotion::Bishop) => text.push('b'),
        None => {}
    }
    text
}

/// Parse 4-or-5-character algebraic move text. Inverse of [`move_to_text`].
pub fn move_from_text(text: &str) -> Result<Move, MoveParseError> {
    if text == "0000" {
        return Ok(NULL_MOVE);
    }

    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(MoveParseError::BadLength(text.len()));
    }

    let from = square_from_bytes(bytes[0], bytes[1])?;
    let to = square_from_bytes(bytes[2], bytes[3])?;
    let promotion = match bytes.get(4) {
        None => None,
        Some(b'r') => Some(Promotion::Rook),
        Some(b'b') => Some(Promotion::Bishop),
        Some(other) => return Err(MoveParseError::BadPromotion(char::from(*other))),
    };

    Ok(encode_move(from, to, promotion))
}

fn square_from_bytes(file: u8, rank: u8) -> Result<Square, MoveParseError> {
    if !(b'a'..=b'h').contains(&file) {
        return Err(MoveParseError::BadFile(char::from(file)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(MoveParseError::BadRank(char::from(rank)));
    }
    Ok(square_at(file - b'a', rank - b'1'))
}

/// Malformed algebraic move text. Surfaced to the protocol layer; crafted
/// out-of-range moves never reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveParseError {
    BadLength(usize),
    BadFile(char),
    BadRank(char),
    BadPromotion(char),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::BadLength(len) => {
                write!(f, "move text must be 4 or 5 characters, got {len}")
            }
            MoveParseError::BadFile(ch) => write!(f, "invalid file character: {ch}"),
            MoveParseError::BadRank(ch) => write!(f, "invalid rank character: {ch}"),
            MoveParseError::BadPromotion(ch) => write!(f, "invalid promotion suffix: {ch}"),
        }
    }
}

impl Error for MoveParseError {}
