//! Game rules for Gess
//!
//! This module implements the rule set:
//! - Ring detection (the loss condition)
//! - Piece movement with capture and off-board removal
//! - Move legality (bounds, purity, self-preservation, direction,
//!   distance, obstruction)

pub mod movement;
pub mod ring;
pub mod validate;

// Re-exports for convenient access
pub use movement::apply_move;
pub use ring::{has_ring, ring_centers};
pub use validate::{is_valid_move, validate_move, Direction, MoveError, MAX_EMPTY_CENTER_DISTANCE};
