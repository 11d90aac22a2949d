//! Ring detection
//!
//! A ring is eight stones of one side surrounding an empty cell. A side
//! with no ring anywhere on the board has lost.

use crate::board::{Board, Player, Pos, Stone, GRID_SIZE};

/// Offsets of the 8 perimeter cells around a center
const PERIMETER: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether the 3x3 window centered at `center` is a ring of `stone`
#[inline]
fn is_ring_at(board: &Board, center: Pos, stone: Stone) -> bool {
    board.is_empty(center)
        && PERIMETER.iter().all(|&(dr, dc)| {
            center
                .offset(dr, dc)
                .is_some_and(|pos| board.get(pos) == stone)
        })
}

/// Every window center that can hold a ring (windows fully on the grid)
fn window_centers() -> impl Iterator<Item = Pos> {
    let last = (GRID_SIZE - 2) as u8;
    (1..=last).flat_map(move |row| (1..=last).map(move |col| Pos::new(row, col)))
}

/// Check if `player` has at least one ring
pub fn has_ring(board: &Board, player: Player) -> bool {
    let stone = player.stone();
    window_centers().any(|center| is_ring_at(board, center, stone))
}

/// Centers of every ring `player` currently has
pub fn ring_centers(board: &Board, player: Player) -> Vec<Pos> {
    let stone = player.stone();
    window_centers()
        .filter(|&center| is_ring_at(board, center, stone))
        .collect()
}
