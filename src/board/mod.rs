//! Board representation for Gess

pub mod board;
pub mod coord;


// Re-exports
pub use board::Board;
pub use coord::{parse_coordinate, CoordinateError};

/// Storage grid size (20x20, including the border sentinel)
pub const GRID_SIZE: usize = 20;
/// Playable interior size (18x18)
pub const PLAY_SIZE: usize = 18;

/// Smallest row/column index that may hold a piece center
pub const MIN_CENTER: u8 = 1;
/// Largest row/column index that may hold a piece center
pub const MAX_CENTER: u8 = 18;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Owner of the stone, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// One side of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    #[display("Black")]
    Black,
    #[display("White")]
    White,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Stone color this side plays
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

/// Position on the storage grid, as (row, col) indices
///
/// Row 0 is the top edge (algebraic row 20) and column 0 is the left edge
/// (algebraic column `a`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < GRID_SIZE && (col as usize) < GRID_SIZE);
        Self { row, col }
    }

    /// Position shifted by a signed offset, if it stays on the grid
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < GRID_SIZE as i32 && col >= 0 && col < GRID_SIZE as i32
    }

    /// Whether a piece may be centered here (not on the border sentinel)
    #[inline]
    pub fn is_center(self) -> bool {
        (MIN_CENTER..=MAX_CENTER).contains(&self.row)
            && (MIN_CENTER..=MAX_CENTER).contains(&self.col)
    }

    /// Whether this cell is part of the border sentinel
    #[inline]
    pub fn is_border(self) -> bool {
        let last = (GRID_SIZE - 1) as u8;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    /// Chebyshev distance to another position
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// The 9 cells of the 3x3 footprint centered here, in row-major order
    ///
    /// Only meaningful for piece centers; returns `None` otherwise.
    pub fn footprint(self) -> Option<[Pos; 9]> {
        if !self.is_center() {
            return None;
        }
        let mut cells = [self; 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = Pos::new(self.row + (i / 3) as u8 - 1, self.col + (i % 3) as u8 - 1);
        }
        Some(cells)
    }

    /// Whether `other` lies inside the 3x3 window centered here
    #[inline]
    pub fn footprint_contains(self, other: Pos) -> bool {
        self.distance(other) <= 1
    }
}
