use crate::domain::widgets::{TickerTapeConfig, default_widgets};
use crate::infrastructure::export::write_widget_page;
use crate::interfaces::app::AppState;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views::{open_local_file, render_page_title};
use eframe::egui;
use tracing::info;

/// Headlines on the left, market widgets on the right
pub struct NewsView;

impl NewsView {
    pub fn render(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        state.news.ensure_loaded();

        render_page_title(ui, "Market News");
        render_ticker_strip(ui);
        ui.add_space(DesignSystem::SPACING_LARGE);

        ui.columns(2, |cols| {
            Card::new()
                .title("Latest Headlines")
                .icon("📰", DesignSystem::ACCENT_STRATEGY)
                .show(&mut cols[0], |ui| render_headlines(ui, state));

            Card::new()
                .title("Market Widgets")
                .icon("📊", DesignSystem::ACCENT_CURVE)
                .show(&mut cols[1], |ui| render_widget_panel(ui, state));
        });
    }
}

fn render_ticker_strip(ui: &mut egui::Ui) {
    let tape = TickerTapeConfig::default();
    egui::Frame::NONE
        .fill(DesignSystem::BG_CARD)
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                for symbol in &tape.symbols {
                    ui.label(
                        egui::RichText::new(&symbol.title)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(&symbol.pro_name)
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                }
            });
        });
}

fn render_headlines(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // Overlapping refreshes are allowed; the last response to arrive wins
        if ui.button("⟳ Refresh").clicked() {
            state.news.request_refresh();
        }
        if state.news.is_loading() {
            ui.spinner();
        }
    });
    if let Some(err) = state.news.last_error() {
        ui.label(
            egui::RichText::new(format!("Last refresh failed: {}", err))
                .size(11.0)
                .color(DesignSystem::LOSS),
        );
    }
    ui.add_space(DesignSystem::SPACING_SMALL);

    let headlines = state.news.headlines();
    if headlines.is_empty() {
        let text = if state.news.is_loading() {
            "Loading headlines..."
        } else {
            "No headlines available."
        };
        ui.label(egui::RichText::new(text).italics().color(DesignSystem::TEXT_MUTED));
        return;
    }

    for (i, headline) in headlines.iter().enumerate() {
        let fill = if i % 2 == 0 {
            DesignSystem::BG_CARD_MUTED
        } else {
            DesignSystem::BG_CARD
        };
        egui::Frame::NONE
            .fill(fill)
            .corner_radius(DesignSystem::ROUNDING_SMALL)
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.hyperlink_to(
                    egui::RichText::new(&headline.title)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                    &headline.link,
                );
                let time = headline.time_label();
                if !time.is_empty() {
                    ui.label(
                        egui::RichText::new(time)
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
            });
        ui.add_space(4.0);
    }
}

fn render_widget_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let widgets = default_widgets();
    ui.label(
        egui::RichText::new(
            "TradingView widgets run in the browser. Open them as a local page:",
        )
        .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    for widget in &widgets {
        ui.label(format!("• {}", widget.kind.title()));
    }
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    if ui.button("🌐 Open widget page").clicked() {
        let path = state.widget_page.clone();
        match write_widget_page(&widgets, &path) {
            Ok(()) => {
                info!("Widget page written to {}", path.display());
                open_local_file(ui, &path);
            }
            Err(e) => state.fail("Writing widget page", e),
        }
    }
}
