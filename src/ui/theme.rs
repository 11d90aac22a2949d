//! Colors and sizes for the Gess GUI

use egui::Color32;

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(214, 178, 128);
pub const BORDER_CELL: Color32 = Color32::from_rgb(170, 130, 90); // out of play
pub const GRID_LINE: Color32 = Color32::from_rgb(72, 50, 28);
pub const LABEL: Color32 = Color32::from_rgb(200, 200, 205);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(22, 22, 26);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(74, 74, 84);
pub const WHITE_STONE: Color32 = Color32::from_rgb(246, 246, 248);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(186, 186, 192);

// Overlays
pub const SELECTION: Color32 = Color32::from_rgb(0, 200, 220);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(226, 64, 58);
pub const RING_OUTLINE: Color32 = Color32::from_rgb(60, 200, 90);

// Translucent fills are not const constructible
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(60, 200, 90, 70)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 60, 50, 70)
}

// Side panel
pub const PANEL_BG: Color32 = Color32::from_rgb(26, 28, 32);
pub const CARD_BG: Color32 = Color32::from_rgb(36, 39, 44);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(238, 238, 242);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(162, 166, 176);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(118, 124, 134);

pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(60, 200, 90);

pub const BOARD_MARGIN: f32 = 28.0;
pub const STONE_RADIUS_RATIO: f32 = 0.38;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const SELECTION_WIDTH: f32 = 3.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.0;
