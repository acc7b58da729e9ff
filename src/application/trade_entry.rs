//! Turning form input into a `Trade`.
//!
//! Input arrives as text. Required fields (date, pair, entry, exit) are
//! validated; optional numeric fields are lenient and fall back to zero or
//! nothing when they do not parse.

use crate::domain::errors::JournalError;
use crate::domain::journal::{AssetClass, Direction, Trade, TradeStatus};
use crate::infrastructure::screenshot::embed_image_file;
use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

/// Where a new trade's status comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Win / Loss / BE from the sign of the P&L
    FromPnl,
    /// Whatever the user picked, regardless of P&L
    Manual(TradeStatus),
}

#[derive(Debug, Clone)]
pub struct TradeDraft {
    pub date: String,
    pub pair: String,
    pub asset_class: Option<AssetClass>,
    pub direction: Direction,
    pub entry: String,
    pub exit_price: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub lot_size: String,
    /// Blank means "derive from prices"
    pub pnl: String,
    pub status: StatusPolicy,
    pub strategy: String,
    pub notes: String,
    /// A link, a `data:` URL, or a path to an image file to embed
    pub screenshot: String,
}

impl Default for TradeDraft {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            pair: String::new(),
            asset_class: None,
            direction: Direction::Long,
            entry: String::new(),
            exit_price: String::new(),
            stop_loss: String::new(),
            take_profit: String::new(),
            lot_size: String::new(),
            pnl: String::new(),
            status: StatusPolicy::FromPnl,
            strategy: String::new(),
            notes: String::new(),
            screenshot: String::new(),
        }
    }
}

impl TradeDraft {
    pub fn build(&self) -> Result<Trade, JournalError> {
        self.build_with_id(Uuid::new_v4().to_string())
    }

    pub fn build_with_id(&self, id: String) -> Result<Trade, JournalError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            JournalError::invalid("date", format!("'{}' is not a YYYY-MM-DD date", self.date))
        })?;

        let pair = self.pair.trim().to_uppercase();
        if pair.is_empty() {
            return Err(JournalError::invalid("pair", "is required"));
        }

        let entry = parse_required(&self.entry, "entry price")?;
        let exit_price = parse_required(&self.exit_price, "exit price")?;

        let pnl = match parse_optional(&self.pnl) {
            Some(pnl) => pnl,
            None => price_move_pnl(self.direction, entry, exit_price),
        };

        let status = match self.status {
            StatusPolicy::FromPnl => TradeStatus::from_pnl(pnl),
            StatusPolicy::Manual(status) => status,
        };

        Ok(Trade {
            id,
            pair,
            asset_class: self.asset_class,
            date,
            direction: self.direction,
            entry,
            exit_price,
            stop_loss: parse_optional(&self.stop_loss),
            take_profit: parse_optional(&self.take_profit),
            lot_size: parse_optional(&self.lot_size).unwrap_or_default(),
            pnl,
            status,
            strategy: non_blank(&self.strategy),
            notes: non_blank(&self.notes),
            screenshot: resolve_screenshot(&self.screenshot)?,
        })
    }

    /// Clear the per-trade fields after a successful submit.
    ///
    /// Date, direction, status, strategy and lot size carry over to the next entry.
    pub fn reset_after_submit(&mut self) {
        self.pair.clear();
        self.entry.clear();
        self.exit_price.clear();
        self.stop_loss.clear();
        self.take_profit.clear();
        self.pnl.clear();
        self.notes.clear();
        self.screenshot.clear();
    }
}

/// Long: exit - entry. Short: entry - exit. Two decimals, half away from zero.
pub fn price_move_pnl(direction: Direction, entry: Decimal, exit_price: Decimal) -> Decimal {
    let raw = match direction {
        Direction::Long => exit_price - entry,
        Direction::Short => entry - exit_price,
    };
    raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn parse_required(raw: &str, field: &str) -> Result<Decimal, JournalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(JournalError::invalid(field, "is required"));
    }
    Decimal::from_str(trimmed)
        .map_err(|_| JournalError::invalid(field, format!("'{}' is not a number", trimmed)))
}

fn parse_optional(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn resolve_screenshot(raw: &str) -> Result<Option<String>, JournalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let is_link = ["http://", "https://", "data:"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix));
    if is_link {
        return Ok(Some(trimmed.to_string()));
    }
    embed_image_file(Path::new(trimmed)).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> TradeDraft {
        TradeDraft {
            date: "2024-03-05".to_string(),
            pair: " eurusd ".to_string(),
            entry: "1.0850".to_string(),
            exit_price: "1.0900".to_string(),
            ..TradeDraft::default()
        }
    }

    #[test]
    fn test_pnl_derived_from_prices() {
        let trade = draft().build().unwrap();
        assert_eq!(trade.pair, "EURUSD");
        assert_eq!(trade.pnl, dec!(0.01));
        assert_eq!(trade.status, TradeStatus::Win);

        let mut short = draft();
        short.direction = Direction::Short;
        let trade = short.build().unwrap();
        assert_eq!(trade.pnl, dec!(-0.01));
        assert_eq!(trade.status, TradeStatus::Loss);
    }

    #[test]
    fn test_entered_pnl_wins_over_prices() {
        let mut d = draft();
        d.pnl = "-25.40".to_string();
        let trade = d.build().unwrap();
        assert_eq!(trade.pnl, dec!(-25.40));
        assert_eq!(trade.status, TradeStatus::Loss);
    }

    #[test]
    fn test_manual_status_is_kept() {
        let mut d = draft();
        d.pnl = "-3".to_string();
        d.status = StatusPolicy::Manual(TradeStatus::BreakEven);
        let trade = d.build().unwrap();
        assert_eq!(trade.status, TradeStatus::BreakEven);
    }

    #[test]
    fn test_required_fields() {
        let mut d = draft();
        d.pair = "  ".to_string();
        assert!(d.build().unwrap_err().to_string().contains("pair"));

        let mut d = draft();
        d.entry = "abc".to_string();
        assert!(d.build().unwrap_err().to_string().contains("entry price"));

        let mut d = draft();
        d.date = "05/03/2024".to_string();
        assert!(d.build().unwrap_err().to_string().contains("date"));
    }

    #[test]
    fn test_lenient_optional_fields() {
        let mut d = draft();
        d.lot_size = "lots".to_string();
        d.stop_loss = "".to_string();
        d.take_profit = "1.0950".to_string();
        d.strategy = "  ".to_string();
        let trade = d.build().unwrap();
        assert_eq!(trade.lot_size, Decimal::ZERO);
        assert_eq!(trade.stop_loss, None);
        assert_eq!(trade.take_profit, Some(dec!(1.0950)));
        assert_eq!(trade.strategy, None);
    }

    #[test]
    fn test_screenshot_link_is_stored_as_is() {
        let mut d = draft();
        d.screenshot = "https://www.tradingview.com/x/abc/".to_string();
        let trade = d.build().unwrap();
        assert_eq!(
            trade.screenshot.as_deref(),
            Some("https://www.tradingview.com/x/abc/")
        );
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(
            price_move_pnl(Direction::Long, dec!(1.000), dec!(1.005)),
            dec!(0.01)
        );
        assert_eq!(
            price_move_pnl(Direction::Short, dec!(1.000), dec!(1.005)),
            dec!(-0.01)
        );
    }

    #[test]
    fn test_reset_keeps_session_fields() {
        let mut d = draft();
        d.strategy = "Breakout".to_string();
        d.lot_size = "0.5".to_string();
        d.reset_after_submit();
        assert!(d.pair.is_empty());
        assert!(d.entry.is_empty());
        assert_eq!(d.strategy, "Breakout");
        assert_eq!(d.lot_size, "0.5");
        assert_eq!(d.date, "2024-03-05");
    }
}
