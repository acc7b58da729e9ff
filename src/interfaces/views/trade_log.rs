use crate::application::trade_entry::{StatusPolicy, TradeDraft};
use crate::domain::journal::{AssetClass, Direction, Trade, TradeStatus};
use crate::infrastructure::export::export_trades_to_path;
use crate::infrastructure::screenshot::write_embedded_image;
use crate::interfaces::app::AppState;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::render_status_badge;
use crate::interfaces::design_system::{DesignSystem, format_money};
use crate::interfaces::views::{open_local_file, render_page_title};
use eframe::egui;
use tracing::info;

const EXPORT_FILE: &str = "tradepulse-trades.csv";

#[derive(Default)]
pub struct TradeLogView {
    draft: TradeDraft,
}

enum RowAction {
    Delete(String),
    OpenScreenshot(String),
}

impl TradeLogView {
    pub fn render(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            render_page_title(ui, "Trade Log");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬇ Export CSV").clicked() {
                    export_csv(state);
                }
            });
        });

        Card::new()
            .title("Log New Trade")
            .icon("＋", DesignSystem::ACCENT_PRIMARY)
            .show(ui, |ui| self.render_form(ui, state));
        ui.add_space(DesignSystem::SPACING_LARGE);

        Card::new()
            .title("Trade History")
            .icon("📜", DesignSystem::TEXT_SECONDARY)
            .show(ui, |ui| render_history(ui, state));
    }

    fn render_form(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let draft = &mut self.draft;

        egui::Grid::new("trade_entry_form")
            .num_columns(4)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                text_field(ui, "Date", &mut draft.date, "YYYY-MM-DD");
                text_field(ui, "Pair", &mut draft.pair, "e.g. XAUUSD");
                ui.end_row();

                ui.label("Direction");
                egui::ComboBox::from_id_salt("trade_direction")
                    .selected_text(draft.direction.to_string())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut draft.direction, Direction::Long, "Long 🟢");
                        ui.selectable_value(&mut draft.direction, Direction::Short, "Short 🔴");
                    });
                ui.label("Outcome");
                egui::ComboBox::from_id_salt("trade_status")
                    .selected_text(status_text(draft.status))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut draft.status,
                            StatusPolicy::FromPnl,
                            status_text(StatusPolicy::FromPnl),
                        );
                        for status in [TradeStatus::Win, TradeStatus::Loss, TradeStatus::BreakEven]
                        {
                            ui.selectable_value(
                                &mut draft.status,
                                StatusPolicy::Manual(status),
                                status_text(StatusPolicy::Manual(status)),
                            );
                        }
                    });
                ui.end_row();

                text_field(ui, "Strategy", &mut draft.strategy, "e.g. Breakout");
                text_field(ui, "Lot Size", &mut draft.lot_size, "0.10");
                ui.end_row();

                text_field(ui, "Entry Price", &mut draft.entry, "");
                text_field(ui, "Exit Price", &mut draft.exit_price, "");
                ui.end_row();

                text_field(ui, "Stop Loss", &mut draft.stop_loss, "optional");
                text_field(ui, "Take Profit", &mut draft.take_profit, "optional");
                ui.end_row();

                text_field(ui, "P&L", &mut draft.pnl, "blank = from prices");
                ui.label("Asset Class");
                egui::ComboBox::from_id_salt("trade_asset_class")
                    .selected_text(
                        draft
                            .asset_class
                            .map(|a| a.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    )
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut draft.asset_class, None, "-");
                        for class in [AssetClass::Forex, AssetClass::Crypto, AssetClass::Stock] {
                            ui.selectable_value(
                                &mut draft.asset_class,
                                Some(class),
                                class.to_string(),
                            );
                        }
                    });
                ui.end_row();
            });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label("Notes");
        ui.add(
            egui::TextEdit::multiline(&mut draft.notes)
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        ui.label("Screenshot");
        ui.add(
            egui::TextEdit::singleline(&mut draft.screenshot)
                .hint_text("Chart link (TradingView / Imgur) or path to an image file")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        let submit = egui::Button::new(
            egui::RichText::new("Add Trade")
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(DesignSystem::ACCENT_PRIMARY)
        .min_size(egui::vec2(ui.available_width(), 36.0));

        if ui.add(submit).clicked() {
            match draft.build() {
                Ok(trade) => match state.store.add_trade(trade) {
                    Ok(()) => draft.reset_after_submit(),
                    Err(e) => state.fail("Saving trade", e),
                },
                Err(e) => state.fail("Trade not added", e),
            }
        }
    }
}

fn text_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(180.0),
    );
}

fn status_text(policy: StatusPolicy) -> &'static str {
    match policy {
        StatusPolicy::Manual(TradeStatus::Win) => "Win 💰",
        StatusPolicy::Manual(TradeStatus::Loss) => "Loss 💸",
        StatusPolicy::Manual(TradeStatus::BreakEven) => "Break Even ⚖",
        StatusPolicy::FromPnl => "From P&L",
    }
}

fn export_csv(state: &mut AppState) {
    let path = state.data_dir().join(EXPORT_FILE);
    match export_trades_to_path(state.store.trades(), &path) {
        Ok(count) => {
            info!("Exported {} trades to {}", count, path.display());
            state.info(format!("Exported {} trades to {}", count, path.display()));
        }
        Err(e) => state.fail("CSV export", e),
    }
}

fn render_history(ui: &mut egui::Ui, state: &mut AppState) {
    if state.store.trades().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.label(
                egui::RichText::new("No trades logged yet.")
                    .italics()
                    .color(DesignSystem::TEXT_MUTED),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);
        });
        return;
    }

    let mut action = None;

    egui::ScrollArea::horizontal()
        .id_salt("trade_history_scroll")
        .show(ui, |ui| {
            egui::Grid::new("trade_history_grid")
                .striped(true)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    for header in [
                        "Date", "Pair", "Type", "Entry", "Exit", "Lot", "R:R", "Strategy",
                        "Status", "P&L", "Chart", "",
                    ] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for trade in state.store.trades() {
                        if let Some(a) = render_trade_row(ui, trade) {
                            action = Some(a);
                        }
                        ui.end_row();
                    }
                });
        });

    match action {
        Some(RowAction::Delete(id)) => {
            if let Err(e) = state.store.delete_trade(&id) {
                state.fail("Deleting trade", e);
            }
        }
        Some(RowAction::OpenScreenshot(id)) => {
            let Some(data_url) = state.store.trade(&id).and_then(|t| t.screenshot.clone()) else {
                return;
            };
            let stem = state.data_dir().join("screenshots").join(&id);
            match write_embedded_image(&data_url, &stem) {
                Ok(path) => open_local_file(ui, &path),
                Err(e) => state.fail("Opening screenshot", e),
            }
        }
        None => {}
    }
}

fn render_trade_row(ui: &mut egui::Ui, trade: &Trade) -> Option<RowAction> {
    let mut action = None;

    ui.label(trade.date.format("%Y-%m-%d").to_string());
    ui.label(egui::RichText::new(&trade.pair).strong());
    let direction_color = match trade.direction {
        Direction::Long => DesignSystem::PROFIT,
        Direction::Short => DesignSystem::LOSS,
    };
    ui.colored_label(direction_color, trade.direction.to_string());
    ui.label(trade.entry.to_string());
    ui.label(trade.exit_price.to_string());
    ui.label(trade.lot_size.to_string());
    match trade.risk_reward() {
        Some(rr) => ui.label(format!("1:{}", rr)),
        None => ui.label(egui::RichText::new("-").color(DesignSystem::TEXT_MUTED)),
    };
    ui.label(trade.strategy.as_deref().unwrap_or("-"));
    render_status_badge(ui, trade.status);
    ui.colored_label(
        DesignSystem::pnl_color(trade.pnl),
        egui::RichText::new(format_money(trade.pnl)).strong(),
    );

    match trade.screenshot.as_deref() {
        Some(_) if trade.has_embedded_screenshot() => {
            if ui.button("🖼").on_hover_text("Open screenshot").clicked() {
                action = Some(RowAction::OpenScreenshot(trade.id.clone()));
            }
        }
        Some(link) => {
            ui.hyperlink_to("🖼 ↗", link);
        }
        None => {
            ui.label(egui::RichText::new("-").color(DesignSystem::TEXT_MUTED));
        }
    }

    if ui
        .button(egui::RichText::new("🗑").color(DesignSystem::TEXT_MUTED))
        .on_hover_text("Delete trade")
        .clicked()
    {
        action = Some(RowAction::Delete(trade.id.clone()));
    }

    action
}
