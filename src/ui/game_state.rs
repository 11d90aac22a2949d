//! Click-driven session state for the Gess GUI
//!
//! A move takes two clicks: the first picks a piece center, the second picks
//! the destination. The session only talks to [`Game`] through its public
//! methods.

use crate::{Game, GameStatus, GessError, Pos};

/// Main session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub game: Game,
    /// Center picked by the first click
    pub selected: Option<Pos>,
    pub last_move: Option<(Pos, Pos)>,
    pub move_count: u32,
    pub message: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_over(&self) -> bool {
        self.game.status().is_over()
    }

    /// Handle a click on a board cell
    pub fn click(&mut self, pos: Pos) {
        if self.is_over() {
            self.message = Some("Game is over - start a new game".to_string());
            return;
        }

        if !pos.is_center() {
            self.selected = None;
            self.message = Some(format!("{pos} is off the playing area"));
            return;
        }

        match self.selected.take() {
            None => {
                self.selected = Some(pos);
                self.message = None;
            }
            // Clicking the selection again drops it
            Some(from) if from == pos => {}
            Some(from) => self.submit(from, pos),
        }
    }

    fn submit(&mut self, from: Pos, to: Pos) {
        match self.game.try_move_pos(from, to) {
            Ok(outcome) => {
                self.last_move = Some((from, to));
                self.move_count += 1;
                self.message = match outcome.status {
                    GameStatus::Won(_) => None,
                    GameStatus::InProgress if outcome.removed > 0 => {
                        Some(format!("{} removed {} stone(s)", outcome.mover, outcome.removed))
                    }
                    GameStatus::InProgress => None,
                };
            }
            Err(err) => {
                self.message = Some(format!("{from} → {to}: {err}"));
            }
        }
    }

    /// Legality of moving the selected piece to `to`, for hover previews
    pub fn preview(&self, to: Pos) -> Option<Result<(), GessError>> {
        let from = self.selected?;
        (from != to).then(|| self.game.validate(from, to))
    }

    /// Side to move resigns
    pub fn resign(&mut self) {
        self.selected = None;
        if let Err(err) = self.game.try_resign() {
            self.message = Some(err.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_coordinate, Player, Stone};

    fn at(text: &str) -> Pos {
        parse_coordinate(text).unwrap()
    }

    #[test]
    fn test_two_clicks_make_a_move() {
        let mut session = Session::new();
        session.click(at("i3"));
        assert_eq!(session.selected, Some(at("i3")));

        session.click(at("i6"));
        assert_eq!(session.selected, None);
        assert_eq!(session.move_count, 1);
        assert_eq!(session.last_move, Some((at("i3"), at("i6"))));
        assert_eq!(session.game.turn(), Player::White);
        assert_eq!(session.game.cell_at(14, 8), Stone::Black);
    }

    #[test]
    fn test_rejected_move_reports_reason() {
        let mut session = Session::new();
        session.click(at("c3"));
        session.click(at("g3"));
        assert_eq!(session.move_count, 0);
        assert_eq!(session.selected, None);
        assert!(session.message.as_deref().is_some_and(|m| m.contains("illegal move")));
        assert_eq!(session.game.turn(), Player::Black);
    }

    #[test]
    fn test_reclick_deselects() {
        let mut session = Session::new();
        session.click(at("c3"));
        session.click(at("c3"));
        assert_eq!(session.selected, None);
        assert_eq!(session.move_count, 0);
    }

    #[test]
    fn test_border_click_is_ignored() {
        let mut session = Session::new();
        session.click(Pos::new(0, 4));
        assert_eq!(session.selected, None);
        assert!(session.message.is_some());
    }

    #[test]
    fn test_preview() {
        let mut session = Session::new();
        assert!(session.preview(at("i6")).is_none());
        session.click(at("i3"));
        assert_eq!(session.preview(at("i6")), Some(Ok(())));
        // The stone already on i7 is in the way
        assert!(matches!(session.preview(at("i7")), Some(Err(_))));
        assert!(matches!(session.preview(at("k5")), Some(Err(_))));
        assert!(session.preview(at("i3")).is_none());
    }

    #[test]
    fn test_resign_and_reset() {
        let mut session = Session::new();
        session.resign();
        assert_eq!(session.game.status(), GameStatus::Won(Player::White));
        session.click(at("c3"));
        assert_eq!(session.selected, None);

        session.reset();
        assert_eq!(session.game.status(), GameStatus::InProgress);
        assert_eq!(session.move_count, 0);
    }
}
