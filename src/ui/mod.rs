//! GUI module for the Gess game
//!
//! A native front end using egui/eframe. It drives [`crate::Game`] through
//! its public API only.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GessApp;
pub use game_state::Session;
