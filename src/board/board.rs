//! Board structure with border sentinel

use std::fmt;

use super::{Player, Pos, Stone, GRID_SIZE};

/// Grid indices (row, columns) of one side's opening stones, top side.
/// The bottom side mirrors these rows.
const OPENING_ROWS: [(u8, &[u8]); 4] = [
    (1, &[2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17]),
    (2, &[1, 2, 3, 5, 7, 8, 9, 10, 12, 14, 16, 17, 18]),
    (3, &[2, 4, 6, 7, 8, 9, 10, 11, 12, 13, 15, 17]),
    (6, &[2, 5, 8, 11, 14, 17]),
];

/// Game board: 20x20 cells whose outermost ring is always empty
///
/// `Board` is `Copy` so a move can be tried on a scratch value without
/// touching the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Stone; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Standard opening position: 43 stones per side, White on top
    pub fn initial() -> Self {
        let mut board = Self::new();
        let last = (GRID_SIZE - 1) as u8;
        for (row, cols) in OPENING_ROWS {
            for &col in cols {
                board.set(Pos::new(row, col), Stone::White);
                board.set(Pos::new(last - row, col), Stone::Black);
            }
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Get stone by raw indices; anything off the grid reads as empty
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Stone {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(Stone::Empty)
    }

    /// Overwrite a cell
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.row as usize][pos.col as usize] = stone;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// The 9 cells of the footprint centered at `center`, row-major
    pub fn footprint(&self, center: Pos) -> Option<[Stone; 9]> {
        center.footprint().map(|cells| cells.map(|pos| self.get(pos)))
    }

    /// Empty every border cell
    pub fn clear_border(&mut self) {
        let last = GRID_SIZE - 1;
        for i in 0..GRID_SIZE {
            self.cells[0][i] = Stone::Empty;
            self.cells[last][i] = Stone::Empty;
            self.cells[i][0] = Stone::Empty;
            self.cells[i][last] = Stone::Empty;
        }
    }

    /// Whether every border cell is empty
    pub fn border_is_clear(&self) -> bool {
        self.positions()
            .filter(|pos| pos.is_border())
            .all(|pos| self.is_empty(pos))
    }

    /// Stones of one side
    pub fn count(&self, player: Player) -> u32 {
        let stone = player.stone();
        self.cells.iter().flatten().filter(|&&s| s == stone).count() as u32
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|s| !s.is_empty()).count() as u32
    }

    /// Every grid position, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        (0..GRID_SIZE as u8).flat_map(|row| (0..GRID_SIZE as u8).map(move |col| Pos::new(row, col)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text rendering: `B`/`W` stones, `.` empty, row numbers on the right
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for stone in cells {
                let c = match stone {
                    Stone::Black => 'B',
                    Stone::White => 'W',
                    Stone::Empty => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f, "{}", GRID_SIZE - row)?;
        }
        for col in 0..GRID_SIZE as u8 {
            write!(f, "{} ", (b'a' + col) as char)?;
        }
        Ok(())
    }
}
