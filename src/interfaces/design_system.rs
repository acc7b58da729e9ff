use crate::application::analytics::DayTone;
use crate::domain::journal::TradeStatus;
use eframe::egui;
use rust_decimal::Decimal;

/// Dark journal theme
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(17, 24, 39); // #111827
    pub const BG_SIDEBAR: egui::Color32 = egui::Color32::from_rgb(31, 41, 55); // #1F2937
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
    pub const BG_CARD_MUTED: egui::Color32 = egui::Color32::from_rgb(24, 32, 45);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(37, 99, 235); // #2563EB
    pub const ACCENT_GOAL: egui::Color32 = egui::Color32::from_rgb(147, 51, 234); // #9333EA
    pub const ACCENT_CURVE: egui::Color32 = egui::Color32::from_rgb(139, 92, 246); // #8B5CF6
    pub const ACCENT_STRATEGY: egui::Color32 = egui::Color32::from_rgb(59, 130, 246); // #3B82F6

    // Outcome
    pub const PROFIT: egui::Color32 = egui::Color32::from_rgb(74, 222, 128); // #4ADE80
    pub const PROFIT_BAR: egui::Color32 = egui::Color32::from_rgb(16, 185, 129); // #10B981
    pub const LOSS: egui::Color32 = egui::Color32::from_rgb(248, 113, 113); // #F87171
    pub const LOSS_BAR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68); // #EF4444
    pub const NEUTRAL: egui::Color32 = egui::Color32::from_gray(156);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(156);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(107);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 6.0;
    pub const ROUNDING_MEDIUM: f32 = 12.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.inactive.bg_fill = Self::BG_CARD;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.4);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    // --- Domain colouring ---

    /// Green at or above zero, red below
    pub fn pnl_color(pnl: Decimal) -> egui::Color32 {
        if pnl >= Decimal::ZERO {
            Self::PROFIT
        } else {
            Self::LOSS
        }
    }

    pub fn status_color(status: TradeStatus) -> egui::Color32 {
        match status {
            TradeStatus::Win => Self::PROFIT,
            TradeStatus::Loss => Self::LOSS,
            TradeStatus::BreakEven => Self::NEUTRAL,
        }
    }

    /// Calendar cell (fill, border)
    pub fn tone_colors(tone: DayTone) -> (egui::Color32, egui::Color32) {
        match tone {
            DayTone::Empty => (Self::BG_CARD_MUTED, egui::Color32::TRANSPARENT),
            DayTone::Profit => (
                Self::PROFIT_BAR.linear_multiply(0.2),
                Self::PROFIT_BAR.linear_multiply(0.5),
            ),
            DayTone::Loss => (
                Self::LOSS_BAR.linear_multiply(0.2),
                Self::LOSS_BAR.linear_multiply(0.5),
            ),
            DayTone::Flat => (egui::Color32::from_gray(75), egui::Color32::TRANSPARENT),
        }
    }
}

/// `+$1,250.50` / `-$40.25`
pub fn format_signed_money(value: Decimal) -> String {
    let sign = if value >= Decimal::ZERO { "+" } else { "-" };
    format!("{}${}", sign, group_thousands(value.abs()))
}

/// `$1,250.5` style without a leading plus
pub fn format_money(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("{}${}", sign, group_thousands(value.abs()))
}

fn group_thousands(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}.{}", grouped, frac),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_formatting() {
        assert_eq!(format_signed_money(dec!(1250.50)), "+$1,250.5");
        assert_eq!(format_signed_money(dec!(-40.25)), "-$40.25");
        assert_eq!(format_signed_money(dec!(0)), "+$0");
        assert_eq!(format_money(dec!(1234567)), "$1,234,567");
        assert_eq!(format_money(dec!(-12)), "-$12");
    }
}
