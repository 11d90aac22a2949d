//! Error types for the game controller.

use derive_more::{Display, Error};

use crate::board::CoordinateError;
use crate::rules::MoveError;

/// Reason a move or resignation was refused.
///
/// None of these are fatal: the game is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GessError {
    /// Location text does not name a piece center.
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(#[error(source)] CoordinateError),

    /// The move breaks one of the movement rules.
    #[display("illegal move: {_0}")]
    IllegalMove(#[error(source)] MoveError),

    /// A side has already won.
    #[display("game is already over")]
    GameAlreadyOver,
}

impl From<CoordinateError> for GessError {
    fn from(err: CoordinateError) -> Self {
        Self::InvalidCoordinate(err)
    }
}

impl From<MoveError> for GessError {
    fn from(err: MoveError) -> Self {
        Self::IllegalMove(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_wraps_reason() {
        let err = GessError::from(MoveError::BreaksLastRing);
        assert_eq!(
            err.to_string(),
            "illegal move: move would leave the mover without a ring"
        );
        assert_eq!(GessError::GameAlreadyOver.to_string(), "game is already over");
    }

    #[test]
    fn test_source_chain() {
        let err: GessError = crate::board::parse_coordinate("a1").unwrap_err().into();
        assert!(matches!(err, GessError::InvalidCoordinate(_)));
        assert!(err.source().is_some());
        assert!(GessError::GameAlreadyOver.source().is_none());
    }
}
