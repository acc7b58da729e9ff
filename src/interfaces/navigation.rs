use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Top-level views reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Analysis,
    TradeLog,
    News,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Analysis,
        View::TradeLog,
        View::News,
        View::Settings,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "📊",
            View::Analysis => "🥧",
            View::TradeLog => "📜",
            View::News => "📰",
            View::Settings => "⚙",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Analysis => "Analysis",
            View::TradeLog => "Trade Log",
            View::News => "News",
            View::Settings => "Settings",
        }
    }
}

pub fn render_sidebar(ui: &mut egui::Ui, current_view: &mut View, display_name: &str) {
    ui.add_space(DesignSystem::SPACING_LARGE);
    ui.label(
        egui::RichText::new("TradePulse")
            .size(24.0)
            .strong()
            .color(DesignSystem::ACCENT_STRATEGY),
    );
    ui.add_space(DesignSystem::SPACING_LARGE);

    for view in View::ALL {
        let is_selected = *current_view == view;
        let (fill, text_color) = if is_selected {
            (DesignSystem::ACCENT_PRIMARY, egui::Color32::WHITE)
        } else {
            (egui::Color32::TRANSPARENT, DesignSystem::TEXT_SECONDARY)
        };

        let response = egui::Frame::NONE
            .fill(fill)
            .corner_radius(DesignSystem::ROUNDING_SMALL)
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(view.icon()).size(16.0).color(text_color));
                    ui.label(
                        egui::RichText::new(view.label())
                            .size(14.0)
                            .strong()
                            .color(text_color),
                    );
                });
            })
            .response
            .interact(egui::Sense::click());

        if response.clicked() {
            *current_view = view;
        }
        ui.add_space(4.0);
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.label(
            egui::RichText::new(format!("Signed in as {}", display_name))
                .size(11.0)
                .color(DesignSystem::TEXT_MUTED),
        );
    });
}
