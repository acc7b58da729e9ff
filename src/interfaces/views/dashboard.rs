use crate::application::analytics::DashboardStats;
use crate::domain::journal::Goal;
use crate::interfaces::app::AppState;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::render_stat_card;
use crate::interfaces::design_system::{DesignSystem, format_signed_money};
use crate::interfaces::navigation::View;
use chrono::{Local, NaiveDate};
use eframe::egui;

/// Goal form input
#[derive(Default)]
pub struct DashboardView {
    goal_text: String,
    goal_deadline: String,
}

enum GoalAction {
    Toggle(String),
    Delete(String),
}

impl DashboardView {
    pub fn render(&mut self, ui: &mut egui::Ui, state: &mut AppState, current_view: &mut View) {
        let stats = DashboardStats::from_trades(state.store.trades());

        // Header
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("TradePulse")
                        .size(48.0)
                        .strong()
                        .color(DesignSystem::ACCENT_STRATEGY),
                );
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Hello,")
                            .size(20.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                    ui.label(
                        egui::RichText::new(&state.store.profile().name)
                            .size(20.0)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let button = egui::Button::new(
                    egui::RichText::new("＋ New Entry")
                        .size(16.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(DesignSystem::ACCENT_PRIMARY)
                .corner_radius(DesignSystem::ROUNDING_MEDIUM);
                if ui.add(button).clicked() {
                    *current_view = View::TradeLog;
                }
            });
        });
        ui.separator();
        ui.add_space(DesignSystem::SPACING_LARGE);

        // Stats
        ui.columns(3, |cols| {
            render_stat_card(
                &mut cols[0],
                "💰",
                "Net P&L",
                &format_signed_money(stats.net_pnl),
                DesignSystem::pnl_color(stats.net_pnl),
            );
            render_stat_card(
                &mut cols[1],
                "📈",
                "Win Rate",
                &format!("{}%", stats.win_rate),
                DesignSystem::TEXT_PRIMARY,
            );
            render_stat_card(
                &mut cols[2],
                "🔢",
                "Total Trades",
                &stats.total_trades.to_string(),
                DesignSystem::TEXT_PRIMARY,
            );
        });
        ui.add_space(DesignSystem::SPACING_LARGE);

        Card::new()
            .title("Goals & Targets")
            .icon("🎯", DesignSystem::ACCENT_GOAL)
            .show(ui, |ui| {
                self.render_goal_form(ui, state);
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                render_goal_list(ui, state);
            });
    }

    fn render_goal_form(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            let text_width = (ui.available_width() - 260.0).max(160.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.goal_text)
                    .hint_text("Write a goal (e.g. Follow plan 100%)")
                    .desired_width(text_width),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.goal_deadline)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(110.0),
            );

            let button = egui::Button::new(
                egui::RichText::new("Set Goal")
                    .strong()
                    .color(egui::Color32::WHITE),
            )
            .fill(DesignSystem::ACCENT_GOAL);
            if ui.add(button).clicked() {
                self.submit_goal(state);
            }
        });
    }

    fn submit_goal(&mut self, state: &mut AppState) {
        let text = self.goal_text.trim();
        let deadline = self.goal_deadline.trim();
        // Both fields are required; an incomplete form is ignored
        if text.is_empty() || deadline.is_empty() {
            return;
        }

        let Ok(deadline) = NaiveDate::parse_from_str(deadline, "%Y-%m-%d") else {
            state.info(format!("'{}' is not a YYYY-MM-DD date", deadline));
            return;
        };

        match state.store.add_goal(Goal::new(text, deadline)) {
            Ok(()) => {
                self.goal_text.clear();
                self.goal_deadline.clear();
            }
            Err(e) => state.fail("Saving goal", e),
        }
    }
}

fn render_goal_list(ui: &mut egui::Ui, state: &mut AppState) {
    if state.store.goals().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(DesignSystem::SPACING_LARGE);
            ui.label(egui::RichText::new("🎯").size(40.0).color(DesignSystem::TEXT_MUTED));
            ui.label(
                egui::RichText::new("No active goals. Set a target to stay disciplined.")
                    .color(DesignSystem::TEXT_MUTED),
            );
            ui.add_space(DesignSystem::SPACING_LARGE);
        });
        return;
    }

    let today = Local::now().date_naive();
    let mut action = None;

    for goal in state.store.goals() {
        Card::new().muted(goal.completed).show(ui, |ui| {
            ui.horizontal(|ui| {
                let (check, check_color) = if goal.completed {
                    ("☑", DesignSystem::PROFIT)
                } else {
                    ("☐", DesignSystem::TEXT_SECONDARY)
                };
                let check_button = egui::Button::new(
                    egui::RichText::new(check).size(24.0).color(check_color),
                )
                .frame(false);
                if ui.add(check_button).clicked() {
                    action = Some(GoalAction::Toggle(goal.id.clone()));
                }

                ui.vertical(|ui| {
                    let mut text = egui::RichText::new(&goal.text).size(18.0);
                    text = if goal.completed {
                        text.strikethrough().color(DesignSystem::TEXT_MUTED)
                    } else {
                        text.color(DesignSystem::TEXT_PRIMARY)
                    };
                    ui.label(text);

                    let deadline_color = if goal.is_overdue(today) {
                        DesignSystem::LOSS
                    } else {
                        DesignSystem::TEXT_MUTED
                    };
                    ui.label(
                        egui::RichText::new(format!("Deadline: {}", goal.deadline))
                            .size(12.0)
                            .color(deadline_color),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new("🗑").color(DesignSystem::TEXT_MUTED))
                        .on_hover_text("Delete goal")
                        .clicked()
                    {
                        action = Some(GoalAction::Delete(goal.id.clone()));
                    }
                });
            });
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    let result = match action {
        Some(GoalAction::Toggle(id)) => state.store.toggle_goal(&id),
        Some(GoalAction::Delete(id)) => state.store.delete_goal(&id),
        None => return,
    };
    if let Err(e) = result {
        state.fail("Updating goals", e);
    }
}
