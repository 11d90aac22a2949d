//! Board rendering for the Gess GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::rules::ring_centers;
use crate::{Board, Player, Pos, Stone, GRID_SIZE};

use super::game_state::Session;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area (excluding label margin)
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, session: &Session) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / GRID_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * GRID_SIZE as f32),
        );

        let board = session.game.board();

        self.draw_cells(&painter);
        self.draw_coordinates(&painter);
        self.draw_rings(&painter, board);
        self.draw_stones(&painter, board);

        if let Some((from, to)) = session.last_move {
            self.draw_last_move(&painter, from, to);
        }

        if let Some(center) = session.selected {
            self.outline_footprint(&painter, center, SELECTION, SELECTION_WIDTH);
        }

        if session.is_over() {
            return None;
        }

        // Hover preview: destination footprint is tinted by legality
        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if let Some(pos) = hovered {
            if let Some(verdict) = session.preview(pos) {
                let tint = if verdict.is_ok() { hover_valid() } else { hover_invalid() };
                self.fill_footprint(&painter, pos, tint);
            } else if session.selected.is_none() && pos.is_center() {
                self.outline_footprint(&painter, pos, TEXT_MUTED, GRID_LINE_WIDTH);
            }
        }

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the 20x20 squares, border cells shaded
    fn draw_cells(&self, painter: &Painter) {
        painter.rect_filled(self.grid_rect, CornerRadius::same(2), BOARD_BG);

        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                let pos = Pos::new(row, col);
                let rect = self.cell_rect(pos);
                if pos.is_border() {
                    painter.rect_filled(rect, CornerRadius::ZERO, BORDER_CELL);
                }
                painter.rect_stroke(rect, CornerRadius::ZERO, stroke, StrokeKind::Inside);
            }
        }
    }

    /// Draw coordinate labels (a-t, 1-20)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let half = self.cell_size * 0.5;

        for i in 0..GRID_SIZE {
            let offset = i as f32 * self.cell_size + half;

            // Column letters below the grid
            let letter = (b'a' + i as u8) as char;
            let pos = Pos2::new(self.grid_rect.min.x + offset, self.grid_rect.max.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);

            // Row numbers on the right, 20 at the top
            let num = GRID_SIZE - i;
            let pos = Pos2::new(self.grid_rect.max.x + BOARD_MARGIN * 0.5, self.grid_rect.min.y + offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), LABEL);
        }
    }

    /// Outline each side's rings
    fn draw_rings(&self, painter: &Painter, board: &Board) {
        for player in [Player::Black, Player::White] {
            for center in ring_centers(board, player) {
                self.outline_footprint(painter, center, RING_OUTLINE, GRID_LINE_WIDTH * 2.0);
            }
        }
    }

    /// Draw all stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.cell_rect(pos).center();
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(1.5, 1.5);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    /// Mark both centers of the last move
    fn draw_last_move(&self, painter: &Painter, from: Pos, to: Pos) {
        let stroke = Stroke::new(1.5, LAST_MOVE_MARKER);
        let start = self.cell_rect(from).center();
        let end = self.cell_rect(to).center();
        painter.line_segment([start, end], stroke);
        painter.circle_filled(end, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn footprint_rect(&self, center: Pos) -> Rect {
        self.cell_rect(center).expand(self.cell_size)
    }

    fn outline_footprint(&self, painter: &Painter, center: Pos, color: Color32, width: f32) {
        if center.is_center() {
            let rect = self.footprint_rect(center);
            painter.rect_stroke(rect, CornerRadius::same(2), Stroke::new(width, color), StrokeKind::Inside);
        }
    }

    fn fill_footprint(&self, painter: &Painter, center: Pos, color: Color32) {
        if center.is_center() {
            painter.rect_filled(self.footprint_rect(center), CornerRadius::same(2), color);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }
}
