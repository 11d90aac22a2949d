//! Turn sequencing and terminal state
//!
//! [`Game`] owns the board, the side to move and the game status. A move is
//! validated, committed, and then the opponent's rings are checked; losing
//! the last ring ends the game in the mover's favor.
//!
//! # Example
//!
//! ```
//! use gess::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("c3", "c4")); // black advances a piece
//! assert_eq!(game.turn(), Player::White);
//!
//! assert!(!game.make_move("c3", "c4")); // white doesn't own that piece
//! assert!(game.resign());
//! assert_eq!(game.status(), GameStatus::Won(Player::Black));
//! ```

use tracing::{debug, info, instrument};

use crate::board::{parse_coordinate, Board, Player, Pos, Stone};
use crate::error::GessError;
use crate::rules::{apply_move, has_ring, validate_move};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameStatus {
    #[display("in progress")]
    InProgress,
    #[display("{_0} won")]
    Won(Player),
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }
}

/// Result of a committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Side that moved
    pub mover: Player,
    /// Stones captured or pushed off the board
    pub removed: u32,
    /// Status after the move
    pub status: GameStatus,
}

/// A game of Gess
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game from the standard opening, Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_position(Board::initial(), Player::Black)
    }

    /// Starts from an arbitrary position.
    pub fn with_position(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move (or, once the game is over, the side that moved last)
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cell contents for rendering; off-grid indices read as empty
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Stone {
        self.board.cell_at(row, col)
    }

    /// Attempts a move given in algebraic text, e.g. `("c3", "c6")`.
    ///
    /// Returns `true` iff the move was legal and applied.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Same as [`Game::make_move`] but reports why a move was refused.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, GessError> {
        let result = self.parse_and_move(from, to);
        if let Err(err) = &result {
            debug!(turn = %self.turn, %err, "move rejected");
        }
        result
    }

    fn parse_and_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, GessError> {
        if self.status.is_over() {
            return Err(GessError::GameAlreadyOver);
        }
        let from = parse_coordinate(from)?;
        let to = parse_coordinate(to)?;
        self.try_move_pos(from, to)
    }

    /// Attempts a move between grid positions.
    pub fn try_move_pos(&mut self, from: Pos, to: Pos) -> Result<MoveOutcome, GessError> {
        self.validate(from, to)?;

        let mover = self.turn;
        let removed = apply_move(&mut self.board, from, to);

        if has_ring(&self.board, mover.opponent()) {
            self.turn = mover.opponent();
        } else {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, "opponent has no ring left");
        }

        Ok(MoveOutcome {
            mover,
            removed,
            status: self.status,
        })
    }

    /// Checks a move for the side to move without applying it.
    pub fn validate(&self, from: Pos, to: Pos) -> Result<(), GessError> {
        if self.status.is_over() {
            return Err(GessError::GameAlreadyOver);
        }
        validate_move(&self.board, self.turn, from, to)?;
        Ok(())
    }

    /// The side to move concedes.
    ///
    /// Returns `true` iff the game was in progress.
    pub fn resign(&mut self) -> bool {
        self.try_resign().is_ok()
    }

    /// Same as [`Game::resign`], returning the winner.
    #[instrument(skip(self))]
    pub fn try_resign(&mut self) -> Result<Player, GessError> {
        if self.status.is_over() {
            return Err(GessError::GameAlreadyOver);
        }
        let winner = self.turn.opponent();
        self.status = GameStatus::Won(winner);
        info!(loser = %self.turn, %winner, "resigned");
        Ok(winner)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
