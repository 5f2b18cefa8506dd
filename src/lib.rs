//! Crate root module declarations for the Rollerball rules engine.
//!
//! This file exposes all top-level subsystems (board state and geometry,
//! per-piece move construction, pseudolegal/legal move generation, and
//! utility helpers) so the binary, tests, and external search or protocol
//! tooling can import stable module paths.

pub mod game_state {
    pub mod board_geometry;
    pub mod board_state;
    pub mod board_types;
    pub mod undo_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_codec;
    pub mod pawn_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_moves;
    pub mod move_applier;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_board;
}
