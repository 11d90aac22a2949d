//! Piece relocation and capture
//!
//! Moving a piece lifts its 3x3 footprint and drops it, cell for cell, on
//! the destination footprint. Whatever was under the destination is
//! overwritten (captured), and anything that lands on the border sentinel
//! is removed from play.

use tracing::trace;

use crate::board::{Board, Pos, Stone};

/// Relocate the footprint at `from` onto `to` and clear the border.
///
/// Does not check legality; see [`super::validate_move`].
/// Both positions must be piece centers, otherwise the board is left
/// unchanged.
///
/// # Returns
/// Number of stones removed from play (captured or pushed off the board)
pub fn apply_move(board: &mut Board, from: Pos, to: Pos) -> u32 {
    let (Some(source), Some(target)) = (from.footprint(), to.footprint()) else {
        return 0;
    };
    let before = board.stone_count();

    let mut lifted = [Stone::Empty; 9];
    for (slot, &pos) in lifted.iter_mut().zip(source.iter()) {
        *slot = board.get(pos);
        board.set(pos, Stone::Empty);
    }
    for (&stone, &pos) in lifted.iter().zip(target.iter()) {
        board.set(pos, stone);
    }
    board.clear_border();

    let removed = before - board.stone_count();
    if removed > 0 {
        trace!(%from, %to, removed, "stones removed");
    }
    removed
}
