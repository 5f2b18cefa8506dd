//! Precomputed per-shape geometry tables.
//!
//! Each of the three ring shapes gets a validity/quadrant mask, the four
//! clockwise rotation transform tables plus their inverses, the promotion
//! square list, and the fixed initial piece placement. Everything is built
//! once at compile time by `const fn` table builders.
//!
//! The quadrant mask is what makes single-frame move generation work: the
//! ring is split into four rotationally symmetric quadrants, and a piece in
//! quadrant `j` is generated against the board rotated `j` times clockwise,
//! where its clockwise travel direction reads as "leftward along the bottom
//! band". Quadrant `j` contains exactly the squares whose `j`-fold clockwise
//! image lands in the canonical region `{ file >= band, rank < band }`
//! (band = ring width). The corner blocks fall to the quadrant whose flow
//! passes through them, so a piece rounding a corner keeps moving forward.

use crate::game_state::board_types::{square_at, BoardShape, Square, DEAD, SLOTS_PER_SIDE};

/// Number of board orientations (0/90/180/270 degrees clockwise).
pub const ORIENTATIONS: usize = 4;

/// Largest promotion-square list across the shapes (8x2 has three).
pub const MAX_PROMO_SQUARES: usize = 3;

/// Read-only geometry for one board shape.
#[derive(Debug)]
pub struct Geometry {
    pub shape: BoardShape,
    /// Side length of the occupied grid (7 or 8).
    pub grid: u8,
    /// Width of the playable ring around the central hole.
    pub band: u8,
    /// Per-square tag: 0 = off-board, otherwise generation orientation + 1.
    pub mask: [u8; 64],
    /// `transform[k][s]` is the image of canonical square `s` after `k`
    /// clockwise quarter turns; `transform[0]` is the identity.
    pub transform: [[Square; 64]; ORIENTATIONS],
    /// Inverse tables: `inverse[k][transform[k][s]] == s`.
    pub inverse: [[Square; 64]; ORIENTATIONS],
    pub promo_squares: [Square; MAX_PROMO_SQUARES],
    pub promo_count: usize,
    /// Initial slot squares, `[white, black]`, `DEAD` for unfielded slots.
    pub initial_slots: [[Square; SLOTS_PER_SIDE]; 2],
}

impl Geometry {
    /// Validity predicate. Out-of-range coordinates are simply not in board.
    #[inline]
    pub fn in_board(&self, file: i32, rank: i32) -> bool {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return false;
        }
        self.mask[(rank * 8 + file) as usize] != 0
    }

    /// Orientation index a piece on this square generates its moves in.
    #[inline]
    pub fn generation_orientation(&self, square: Square) -> usize {
        debug_assert!(
            self.mask[square as usize] != 0,
            "generation orientation queried for an off-board square"
        );
        (self.mask[square as usize] - 1) as usize
    }

    #[inline]
    pub fn is_promo_square(&self, square: Square) -> bool {
        self.promo_squares[..self.promo_count].contains(&square)
    }

    /// First file (in a generation frame) that counts as the quadrant's
    /// trailing half: a rook there may only step one square upward. Works
    /// out to 4 on both the 7- and 8-wide grids.
    #[inline]
    pub fn midpoint_file(&self) -> i32 {
        (self.grid as i32 + 1) / 2
    }
}

pub static GEOMETRY_SEVEN_THREE: Geometry = build_geometry(BoardShape::SevenThree);
pub static GEOMETRY_EIGHT_FOUR: Geometry = build_geometry(BoardShape::EightFour);
pub static GEOMETRY_EIGHT_TWO: Geometry = build_geometry(BoardShape::EightTwo);

pub fn geometry_for(shape: BoardShape) -> &'static Geometry {
    match shape {
        BoardShape::SevenThree => &GEOMETRY_SEVEN_THREE,
        BoardShape::EightFour => &GEOMETRY_EIGHT_FOUR,
        BoardShape::EightTwo => &GEOMETRY_EIGHT_TWO,
    }
}

const fn shape_params(shape: BoardShape) -> (u8, u8) {
    match shape {
        BoardShape::SevenThree => (7, 2),
        BoardShape::EightFour => (8, 2),
        BoardShape::EightTwo => (8, 3),
    }
}

const fn in_ring(grid: u8, band: u8, file: u8, rank: u8) -> bool {
    if file >= grid || rank >= grid {
        return false;
    }
    let in_hole = file >= band && file < grid - band && rank >= band && rank < grid - band;
    !in_hole
}

/// One clockwise quarter turn of the `grid`-sized board.
const fn rotate_cw(file: u8, rank: u8, grid: u8) -> (u8, u8) {
    (rank, grid - 1 - file)
}

/// Quadrant index of a ring square: the number of clockwise quarter turns
/// that carry it into the canonical band region.
const fn generation_quadrant(grid: u8, band: u8, file: u8, rank: u8) -> u8 {
    let mut f = file;
    let mut r = rank;
    let mut j = 0;
    while j < 4 {
        if r < band && f >= band {
            return j;
        }
        let (nf, nr) = rotate_cw(f, r, grid);
        f = nf;
        r = nr;
        j += 1;
    }
    // Every ring square reaches the canonical region within four turns.
    0
}

const fn build_geometry(shape: BoardShape) -> Geometry {
    let (grid, band) = shape_params(shape);

    let mut mask = [0u8; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let file = (sq % 8) as u8;
        let rank = (sq / 8) as u8;
        if in_ring(grid, band, file, rank) {
            mask[sq] = generation_quadrant(grid, band, file, rank) + 1;
        }
        sq += 1;
    }

    let mut transform = [[0u8; 64]; ORIENTATIONS];
    let mut inverse = [[0u8; 64]; ORIENTATIONS];
    let mut k = 0usize;
    while k < ORIENTATIONS {
        let mut sq = 0usize;
        while sq < 64 {
            let mut file = (sq % 8) as u8;
            let mut rank = (sq / 8) as u8;
            let image = if file < grid && rank < grid {
                let mut turns = 0usize;
                while turns < k {
                    let (nf, nr) = rotate_cw(file, rank, grid);
                    file = nf;
                    rank = nr;
                    turns += 1;
                }
                square_at(file, rank)
            } else {
                // Cells outside the occupied grid rotate onto themselves so
                // the table stays a permutation of 0..64.
                sq as Square
            };
            transform[k][sq] = image;
            inverse[k][image as usize] = sq as Square;
            sq += 1;
        }
        k += 1;
    }

    let (promo_squares, promo_count) = match shape {
        BoardShape::SevenThree | BoardShape::EightFour => {
            ([square_at(2, 0), square_at(2, 1), 0], 2)
        }
        BoardShape::EightTwo => ([square_at(2, 0), square_at(2, 1), square_at(2, 2)], 3),
    };

    Geometry {
        shape,
        grid,
        band,
        mask,
        transform,
        inverse,
        promo_squares,
        promo_count,
        initial_slots: initial_slots(shape),
    }
}

// Slot order per side: rook, rook, king, bishop, knight, knight, four pawns.
const fn initial_slots(shape: BoardShape) -> [[Square; SLOTS_PER_SIDE]; 2] {
    match shape {
        BoardShape::SevenThree => [
            [
                square_at(4, 1),
                square_at(4, 0),
                square_at(3, 1),
                square_at(3, 0),
                DEAD,
                DEAD,
                square_at(2, 1),
                square_at(2, 0),
                DEAD,
                DEAD,
            ],
            [
                square_at(2, 5),
                square_at(2, 6),
                square_at(3, 5),
                square_at(3, 6),
                DEAD,
                DEAD,
                square_at(4, 5),
                square_at(4, 6),
                DEAD,
                DEAD,
            ],
        ],
        BoardShape::EightFour => [
            [
                square_at(4, 1),
                square_at(4, 0),
                square_at(3, 1),
                square_at(3, 0),
                DEAD,
                DEAD,
                square_at(2, 1),
                square_at(2, 0),
                square_at(5, 1),
                square_at(5, 0),
            ],
            [
                square_at(3, 6),
                square_at(3, 7),
                square_at(4, 6),
                square_at(4, 7),
                DEAD,
                DEAD,
                square_at(2, 6),
                square_at(2, 7),
                square_at(5, 6),
                square_at(5, 7),
            ],
        ],
        BoardShape::EightTwo => [
            [
                square_at(5, 1),
                square_at(5, 0),
                square_at(4, 1),
                square_at(4, 2),
                square_at(3, 1),
                square_at(3, 2),
                square_at(2, 1),
                square_at(2, 0),
                square_at(2, 2),
                square_at(5, 2),
            ],
            [
                square_at(2, 6),
                square_at(2, 7),
                square_at(3, 6),
                square_at(3, 5),
                square_at(4, 6),
                square_at(4, 5),
                square_at(5, 6),
                square_at(5, 7),
                square_at(2, 5),
                square_at(5, 5),
            ],
        ],
    }
}
