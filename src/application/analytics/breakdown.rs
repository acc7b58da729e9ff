use super::summary::win_percentage;
use crate::domain::journal::Trade;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Summed P&L for one pair or strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTotal {
    pub name: String,
    pub pnl: Decimal,
}

/// One step of the cumulative win-rate curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingPoint {
    /// 1-based position in date order
    pub trade: usize,
    pub win_rate: u32,
}

pub fn pnl_by_pair(trades: &[Trade]) -> Vec<GroupTotal> {
    group_totals(trades, |t| t.pair.clone())
}

/// Trades without a strategy are grouped under "Unknown"
pub fn pnl_by_strategy(trades: &[Trade]) -> Vec<GroupTotal> {
    group_totals(trades, |t| t.strategy_label().to_string())
}

fn group_totals<F>(trades: &[Trade], key: F) -> Vec<GroupTotal>
where
    F: Fn(&Trade) -> String,
{
    let mut sums: BTreeMap<String, Decimal> = BTreeMap::new();
    for trade in trades {
        *sums.entry(key(trade)).or_default() += trade.pnl;
    }

    // BTreeMap iteration is name-ordered, so the stable sort breaks ties by name
    let mut totals: Vec<GroupTotal> = sums
        .into_iter()
        .map(|(name, pnl)| GroupTotal { name, pnl })
        .collect();
    totals.sort_by(|a, b| b.pnl.cmp(&a.pnl));
    totals
}

/// Cumulative win rate after each trade, oldest first.
///
/// Same-day trades keep their relative order from the input.
pub fn rolling_win_rate(trades: &[Trade]) -> Vec<RollingPoint> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.date);

    let mut wins = 0;
    ordered
        .iter()
        .enumerate()
        .map(|(i, trade)| {
            if trade.is_win() {
                wins += 1;
            }
            RollingPoint {
                trade: i + 1,
                win_rate: win_percentage(wins, i + 1),
            }
        })
        .collect()
}

/// Everything the Analysis view charts besides the calendar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub by_pair: Vec<GroupTotal>,
    pub by_strategy: Vec<GroupTotal>,
    pub rolling: Vec<RollingPoint>,
}

impl AnalysisReport {
    pub fn build(trades: &[Trade]) -> Self {
        Self {
            by_pair: pnl_by_pair(trades),
            by_strategy: pnl_by_strategy(trades),
            rolling: rolling_win_rate(trades),
        }
    }
}
