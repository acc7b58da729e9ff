use crate::application::analytics::{GroupTotal, RollingPoint};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// One bar per group, labelled on the x axis; negative totals are drawn red
pub fn render_group_bars(
    ui: &mut egui::Ui,
    id: &str,
    totals: &[GroupTotal],
    positive_color: egui::Color32,
) {
    if totals.is_empty() {
        render_empty_chart(ui, "No trades to chart yet.");
        return;
    }

    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, group)| {
            let fill = if group.pnl >= Decimal::ZERO {
                positive_color
            } else {
                DesignSystem::LOSS_BAR
            };
            Bar::new(i as f64, group.pnl.to_f64().unwrap_or(0.0))
                .width(0.5)
                .fill(fill)
                .name(&group.name)
        })
        .collect();

    let names: Vec<String> = totals.iter().map(|g| g.name.clone()).collect();

    Plot::new(id)
        .height(260.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_grid([false, true])
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > f64::EPSILON || index < 0.0 {
                return String::new();
            }
            names.get(index as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("${}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("P&L", bars));
        });
}

/// Cumulative win rate over trade number, fixed 0..100 range
pub fn render_rolling_line(ui: &mut egui::Ui, points: &[RollingPoint]) {
    if points.is_empty() {
        render_empty_chart(ui, "Log a few trades to see your consistency curve.");
        return;
    }

    let series: Vec<[f64; 2]> = points
        .iter()
        .map(|p| [p.trade as f64, p.win_rate as f64])
        .collect();

    Plot::new("rolling_win_rate_plot")
        .height(260.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(100.0)
        .y_axis_formatter(|mark, _range| format!("{}%", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Win Rate %", PlotPoints::from(series))
                    .color(DesignSystem::ACCENT_CURVE)
                    .width(3.0),
            );
        });
}

fn render_empty_chart(ui: &mut egui::Ui, message: &str) {
    ui.allocate_ui(egui::vec2(ui.available_width(), 120.0), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(message)
                    .italics()
                    .color(DesignSystem::TEXT_MUTED),
            );
        });
    });
}
