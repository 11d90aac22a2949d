//! Gess rules engine
//!
//! A rules engine for Gess, played on an 18x18 interior grid stored inside a
//! 20x20 board whose outer ring is always empty:
//! - A move lifts a 3x3 piece and drops it elsewhere, capturing whatever
//!   lies under the destination
//! - Perimeter stones choose the directions a piece may travel
//! - A piece with an empty center moves at most 3 cells; with a stone at
//!   its center it moves any unobstructed distance
//! - Stones pushed onto the border leave the game
//! - A side with no ring (8 stones around an empty cell) has lost
//!
//! # Architecture
//!
//! - [`board`]: Grid storage and algebraic coordinates
//! - [`rules`]: Ring detection, move application, move validation
//! - [`game`]: Turn sequencing, win detection, resignation
//! - [`ui`]: Desktop front end built on the public [`Game`] API
//!
//! # Quick Start
//!
//! ```
//! use gess::{Game, GameStatus, Stone};
//!
//! let mut game = Game::new();
//!
//! // Coordinates are column letter b..s and row number 2..19
//! assert!(game.make_move("i3", "i6"));
//! assert_eq!(game.cell_at(14, 8), Stone::Black);
//!
//! // Illegal moves change nothing
//! assert!(!game.make_move("i3", "i6"));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{parse_coordinate, Board, CoordinateError, Player, Pos, Stone, GRID_SIZE};
pub use error::GessError;
pub use game::{Game, GameStatus, MoveOutcome};
pub use rules::{Direction, MoveError};
