use crate::domain::journal::TradeStatus;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Headline number card on the dashboard
pub fn render_stat_card(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    value: &str,
    value_color: egui::Color32,
) {
    Card::new().min_height(90.0).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(icon)
                    .size(14.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.label(
                egui::RichText::new(title)
                    .size(13.0)
                    .color(DesignSystem::TEXT_SECONDARY),
            );
        });
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(value)
                .size(32.0)
                .strong()
                .color(value_color),
        );
    });
}

/// Coloured Win / Loss / BE pill
pub fn render_status_badge(ui: &mut egui::Ui, status: TradeStatus) {
    let color = DesignSystem::status_color(status);
    egui::Frame::NONE
        .fill(color.linear_multiply(0.2))
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(status.label())
                    .size(11.0)
                    .strong()
                    .color(color),
            );
        });
}
