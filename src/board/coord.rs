//! Algebraic coordinates
//!
//! Columns are lettered `a` (index 0) through `t` (index 19) from the left;
//! rows are numbered `1` (index 19) through `20` (index 0) from the bottom.
//! Only `b2`..`s19` name cells a piece may be centered on, so only those
//! parse.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use super::{Pos, GRID_SIZE, MAX_CENTER, MIN_CENTER};

/// Text that does not name a legal piece center.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("'{text}' is not a valid piece center (expected b2..s19)")]
pub struct CoordinateError {
    pub text: String,
}

impl CoordinateError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// Parse algebraic text such as `"m3"` into grid indices.
pub fn parse_coordinate(text: &str) -> Result<Pos, CoordinateError> {
    let mut chars = text.chars();
    let letter = chars.next().ok_or_else(|| CoordinateError::new(text))?;
    let digits = chars.as_str();

    if !letter.is_ascii_lowercase() {
        return Err(CoordinateError::new(text));
    }
    let col = letter as u8 - b'a';

    // Exact decimal only: no sign, no leading zero, no whitespace
    if digits.is_empty()
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(CoordinateError::new(text));
    }
    let number: u8 = digits.parse().map_err(|_| CoordinateError::new(text))?;
    if number as usize >= GRID_SIZE {
        return Err(CoordinateError::new(text));
    }
    let row = GRID_SIZE as u8 - number;

    if !(MIN_CENTER..=MAX_CENTER).contains(&row) || !(MIN_CENTER..=MAX_CENTER).contains(&col) {
        return Err(CoordinateError::new(text));
    }
    Ok(Pos::new(row, col))
}

impl FromStr for Pos {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'a' + self.col) as char;
        write!(f, "{}{}", letter, GRID_SIZE - self.row as usize)
    }
}
