use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used when a trade carries no strategy
pub const UNKNOWN_STRATEGY: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "long" | "buy" => Ok(Direction::Long),
            "short" | "sell" => Ok(Direction::Short),
            _ => anyhow::bail!("Invalid direction: {}. Must be 'long' or 'short'", s),
        }
    }
}

/// Outcome of a closed trade.
///
/// Serialized as `Win`, `Loss` or `BE` so stored journals stay readable by
/// older builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Win,
    Loss,
    #[serde(rename = "BE", alias = "BreakEven")]
    BreakEven,
}

impl TradeStatus {
    /// Win if pnl > 0, Loss if pnl < 0, BreakEven otherwise
    pub fn from_pnl(pnl: Decimal) -> Self {
        if pnl > Decimal::ZERO {
            TradeStatus::Win
        } else if pnl < Decimal::ZERO {
            TradeStatus::Loss
        } else {
            TradeStatus::BreakEven
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TradeStatus::Win => "Win",
            TradeStatus::Loss => "Loss",
            TradeStatus::BreakEven => "Break Even",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeStatus::Win => write!(f, "Win"),
            TradeStatus::Loss => write!(f, "Loss"),
            TradeStatus::BreakEven => write!(f, "BE"),
        }
    }
}

impl FromStr for TradeStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(TradeStatus::Win),
            "loss" => Ok(TradeStatus::Loss),
            "be" | "breakeven" | "break-even" | "break even" => Ok(TradeStatus::BreakEven),
            _ => anyhow::bail!("Invalid status: {}. Must be 'win', 'loss' or 'be'", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    Forex,
    Crypto,
    Stock,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FromStr for AssetClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forex" | "fx" => Ok(AssetClass::Forex),
            "crypto" => Ok(AssetClass::Crypto),
            "stock" | "stocks" => Ok(AssetClass::Stock),
            _ => anyhow::bail!("Invalid asset class: {}. Must be 'forex', 'crypto' or 'stock'", s),
        }
    }
}

/// One logged position, entry to exit.
///
/// Trades are immutable once recorded; the journal only ever adds or deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub pair: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<AssetClass>,
    pub date: NaiveDate,
    pub direction: Direction,
    pub entry: Decimal,
    pub exit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<Decimal>,
    pub lot_size: Decimal,
    pub pnl: Decimal,
    pub status: TradeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Either a `data:` URL holding the image bytes or an external link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

impl Trade {
    /// Analytics count a trade as a win by its P&L, not by its recorded status
    pub fn is_win(&self) -> bool {
        self.pnl > Decimal::ZERO
    }

    /// Grouping label; a blank or whitespace-only strategy counts as "Unknown"
    pub fn strategy_label(&self) -> &str {
        match self.strategy.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => UNKNOWN_STRATEGY,
        }
    }

    /// Reward-to-risk ratio from the planned take profit and stop loss.
    pub fn risk_reward(&self) -> Option<Decimal> {
        let stop = self.stop_loss?;
        let target = self.take_profit?;
        let risk = (self.entry - stop).abs();
        if risk.is_zero() {
            return None;
        }
        Some(((target - self.entry).abs() / risk).round_dp(2))
    }

    pub fn has_embedded_screenshot(&self) -> bool {
        self.screenshot
            .as_deref()
            .is_some_and(|s| s.starts_with("data:"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Trade {
        Trade {
            id: "t-1".to_string(),
            pair: "EURUSD".to_string(),
            asset_class: Some(AssetClass::Forex),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            direction: Direction::Long,
            entry: dec!(1.0850),
            exit_price: dec!(1.0900),
            stop_loss: Some(dec!(1.0800)),
            take_profit: Some(dec!(1.0950)),
            lot_size: dec!(1),
            pnl: dec!(50),
            status: TradeStatus::Win,
            strategy: None,
            notes: None,
            screenshot: None,
        }
    }

    #[test]
    fn test_status_from_pnl_sign() {
        assert_eq!(TradeStatus::from_pnl(dec!(0.01)), TradeStatus::Win);
        assert_eq!(TradeStatus::from_pnl(dec!(-3)), TradeStatus::Loss);
        assert_eq!(TradeStatus::from_pnl(Decimal::ZERO), TradeStatus::BreakEven);
    }

    #[test]
    fn test_status_serializes_break_even_as_be() {
        let json = serde_json::to_string(&TradeStatus::BreakEven).unwrap();
        assert_eq!(json, "\"BE\"");
        let parsed: TradeStatus = serde_json::from_str("\"BreakEven\"").unwrap();
        assert_eq!(parsed, TradeStatus::BreakEven);
    }

    #[test]
    fn test_strategy_label_defaults_to_unknown() {
        let mut trade = sample();
        assert_eq!(trade.strategy_label(), "Unknown");
        trade.strategy = Some("   ".to_string());
        assert_eq!(trade.strategy_label(), "Unknown");
        trade.strategy = Some("Breakout".to_string());
        assert_eq!(trade.strategy_label(), "Breakout");
    }

    #[test]
    fn test_risk_reward() {
        let trade = sample();
        assert_eq!(trade.risk_reward(), Some(dec!(2)));

        let mut flat = sample();
        flat.stop_loss = Some(flat.entry);
        assert_eq!(flat.risk_reward(), None);

        let mut unplanned = sample();
        unplanned.take_profit = None;
        assert_eq!(unplanned.risk_reward(), None);
    }

    #[test]
    fn test_trade_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("exitPrice").is_some());
        assert!(json.get("lotSize").is_some());
        assert!(json.get("assetClass").is_some());
        assert!(json.get("strategy").is_none());
        assert_eq!(json["date"], "2024-03-05");
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("LONG".parse::<Direction>().unwrap(), Direction::Long);
        assert_eq!("sell".parse::<Direction>().unwrap(), Direction::Short);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
