use crate::domain::journal::Trade;
use rust_decimal::Decimal;

/// Dashboard headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub net_pnl: Decimal,
    /// Whole percent, 0..=100
    pub win_rate: u32,
    pub total_trades: usize,
}

impl DashboardStats {
    pub fn from_trades(trades: &[Trade]) -> Self {
        Self {
            net_pnl: net_pnl(trades),
            win_rate: win_rate(trades),
            total_trades: trades.len(),
        }
    }
}

pub fn net_pnl(trades: &[Trade]) -> Decimal {
    trades.iter().map(|t| t.pnl).sum()
}

/// Share of trades with positive P&L, as a whole percent; 0 for no trades
pub fn win_rate(trades: &[Trade]) -> u32 {
    let wins = trades.iter().filter(|t| t.is_win()).count();
    win_percentage(wins, trades.len())
}

/// `round(100 * wins / total)` with halves rounded up, in integer arithmetic
pub fn win_percentage(wins: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * wins + total) / (2 * total)) as u32
}
