//! Pure reductions over the trade list, recomputed on every render.

pub mod breakdown;
pub mod calendar;
pub mod summary;

pub use breakdown::{
    AnalysisReport, GroupTotal, RollingPoint, pnl_by_pair, pnl_by_strategy, rolling_win_rate,
};
pub use calendar::{CalendarDay, CalendarMonth, DayTone, MonthCursor};
pub use summary::{DashboardStats, net_pnl, win_rate};
