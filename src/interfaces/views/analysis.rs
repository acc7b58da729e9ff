use crate::application::analytics::{AnalysisReport, CalendarDay, CalendarMonth, MonthCursor};
use crate::interfaces::app::AppState;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::charts::{render_group_bars, render_rolling_line};
use crate::interfaces::design_system::{DesignSystem, format_signed_money};
use crate::interfaces::views::render_page_title;
use eframe::egui;
use rust_decimal::Decimal;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const CELL_HEIGHT: f32 = 72.0;

pub struct AnalysisView {
    cursor: MonthCursor,
}

impl Default for AnalysisView {
    fn default() -> Self {
        Self {
            cursor: MonthCursor::current(),
        }
    }
}

impl AnalysisView {
    pub fn render(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let trades = state.store.trades();
        let month = CalendarMonth::build(trades, self.cursor);
        let report = AnalysisReport::build(trades);

        render_page_title(ui, "Analysis");

        Card::new().show(ui, |ui| {
            self.render_month_header(ui);
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            render_calendar(ui, &month);
        });
        ui.add_space(DesignSystem::SPACING_LARGE);

        ui.columns(2, |cols| {
            Card::new()
                .title("Best Pairs")
                .icon("🏆", DesignSystem::PROFIT_BAR)
                .show(&mut cols[0], |ui| {
                    render_group_bars(
                        ui,
                        "pnl_by_pair_plot",
                        &report.by_pair,
                        DesignSystem::PROFIT_BAR,
                    );
                });
            Card::new()
                .title("Strategy Performance")
                .icon("🧠", DesignSystem::ACCENT_STRATEGY)
                .show(&mut cols[1], |ui| {
                    render_group_bars(
                        ui,
                        "pnl_by_strategy_plot",
                        &report.by_strategy,
                        DesignSystem::ACCENT_STRATEGY,
                    );
                });
        });
        ui.add_space(DesignSystem::SPACING_LARGE);

        Card::new()
            .title("Consistency Curve (Win Rate)")
            .icon("📈", DesignSystem::ACCENT_CURVE)
            .show(ui, |ui| render_rolling_line(ui, &report.rolling));
    }

    fn render_month_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("📅").size(20.0));
            ui.label(
                egui::RichText::new(self.cursor.label())
                    .size(22.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").on_hover_text("Next month").clicked() {
                    self.cursor = self.cursor.next();
                }
                if ui.button("◀").on_hover_text("Previous month").clicked() {
                    self.cursor = self.cursor.prev();
                }
            });
        });
    }
}

fn render_calendar(ui: &mut egui::Ui, month: &CalendarMonth) {
    let spacing = 6.0;
    let cell_width = ((ui.available_width() - spacing * 6.0) / 7.0).max(40.0);

    egui::Grid::new("calendar_heatmap")
        .spacing([spacing, spacing])
        .min_col_width(cell_width)
        .max_col_width(cell_width)
        .show(ui, |ui| {
            for name in WEEKDAYS {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(name)
                            .size(12.0)
                            .strong()
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            }
            ui.end_row();

            for week in month.weeks() {
                for cell in week {
                    match cell {
                        Some(day) => render_day_cell(ui, day, cell_width),
                        None => {
                            ui.allocate_exact_size(
                                egui::vec2(cell_width, CELL_HEIGHT),
                                egui::Sense::hover(),
                            );
                        }
                    }
                }
                ui.end_row();
            }
        });
}

fn render_day_cell(ui: &mut egui::Ui, day: &CalendarDay, width: f32) {
    let (fill, border) = DesignSystem::tone_colors(day.tone());

    egui::Frame::NONE
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .inner_margin(egui::Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(width - 12.0);
            ui.set_height(CELL_HEIGHT - 12.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(day.day.to_string())
                        .size(12.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                if day.trade_count > 0 {
                    let color = if day.total_pnl > Decimal::ZERO {
                        DesignSystem::PROFIT
                    } else if day.total_pnl < Decimal::ZERO {
                        DesignSystem::LOSS
                    } else {
                        DesignSystem::NEUTRAL
                    };
                    ui.label(
                        egui::RichText::new(format_signed_money(day.total_pnl))
                            .size(13.0)
                            .strong()
                            .color(color),
                    );
                    let count = if day.trade_count == 1 {
                        "1 trade".to_string()
                    } else {
                        format!("{} trades", day.trade_count)
                    };
                    ui.label(
                        egui::RichText::new(count)
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
            });
        });
}
