//! Main application for the Gess GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::rules::ring_centers;
use crate::{GameStatus, Player};

use super::board_view::BoardView;
use super::game_state::Session;
use super::theme::*;

/// Main Gess application
#[derive(Default)]
pub struct GessApp {
    session: Session,
    board_view: BoardView,
}

impl GessApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Game menu and move counter
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    if ui.button("Resign").clicked() {
                        self.session.resign();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.session.move_count));
                });
            });
        });
    }

    /// Right-hand info panel
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_material_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let GameStatus::Won(winner) = self.session.game.status() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GESS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Chess-like moves with Go stones").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Side to move and what the next click does
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.game.turn();
            let (stone_char, accent, stone_color) = match turn {
                Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(center) = self.session.selected {
                        (format!("Moving piece at {center}"), STATUS_WARNING)
                    } else {
                        ("Select a piece".to_string(), STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Stones and rings left for each side
    fn render_material_card(&self, ui: &mut egui::Ui) {
        let board = self.session.game.board();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MATERIAL").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for (player, symbol) in [(Player::Black, "●"), (Player::White, "○")] {
                let stones = board.count(player);
                let rings = ring_centers(board, player).len();
                let ring_color = if rings <= 1 { STATUS_WARNING } else { TEXT_SECONDARY };
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("{stones} stones")).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{rings} ring(s)")).size(12.0).color(ring_color));
                    });
                });
                ui.add_space(6.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("⚑ Resign").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.resign();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("↻ New Game").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.reset();
                    }
                });
            });
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Player) {
        let (symbol, accent) = match winner {
            Player::Black => ("●", egui::Color32::from_rgb(70, 70, 75)),
            Player::White => ("○", egui::Color32::from_rgb(220, 220, 225)),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space((ui.available_width() - 120.0).max(0.0) / 2.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(winner.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY));
                            if ui.add(label.sense(egui::Sense::click())).clicked() {
                                self.session.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Board in the central panel, forwarding clicks to the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            if let Some(pos) = self.board_view.show(ui, &self.session) {
                self.session.click(pos);
            }
        });
    }

    /// Keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }

            // Esc - Drop the selected piece
            if i.key_pressed(egui::Key::Escape) {
                self.session.clear_selection();
            }
        });
    }
}

impl eframe::App for GessApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
