use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradepulse::application::analytics::{
    AnalysisReport, CalendarMonth, DashboardStats, MonthCursor, net_pnl, win_rate,
};
use tradepulse::domain::journal::{Direction, Trade, TradeStatus};

fn trade(id: &str, date: (i32, u32, u32), pair: &str, strategy: Option<&str>, pnl: Decimal) -> Trade {
    Trade {
        id: id.to_string(),
        pair: pair.to_string(),
        asset_class: None,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        direction: Direction::Long,
        entry: dec!(100),
        exit_price: dec!(100) + pnl,
        stop_loss: None,
        take_profit: None,
        lot_size: dec!(1),
        pnl,
        status: TradeStatus::from_pnl(pnl),
        strategy: strategy.map(str::to_string),
        notes: None,
        screenshot: None,
    }
}

fn sample_journal() -> Vec<Trade> {
    // Newest first, as the store keeps them
    vec![
        trade("t5", (2024, 4, 2), "XAUUSD", Some("Breakout"), dec!(35)),
        trade("t4", (2024, 3, 12), "EURUSD", None, dec!(-15.5)),
        trade("t3", (2024, 3, 5), "EURUSD", Some("Breakout"), dec!(-4)),
        trade("t2", (2024, 3, 5), "GBPUSD", Some("Reversal"), dec!(10)),
        trade("t1", (2024, 3, 1), "XAUUSD", Some("Reversal"), dec!(0)),
    ]
}

#[test]
fn test_dashboard_reductions() {
    let trades = sample_journal();
    assert_eq!(net_pnl(&trades), dec!(25.5));
    // 2 of 5 trades have positive P&L
    assert_eq!(win_rate(&trades), 40);

    let stats = DashboardStats::from_trades(&trades);
    assert_eq!(stats.total_trades, 5);
    assert_eq!(stats.net_pnl, trades.iter().map(|t| t.pnl).sum::<Decimal>());
}

#[test]
fn test_break_even_is_not_a_win() {
    let trades = vec![trade("t1", (2024, 1, 1), "EURUSD", None, dec!(0))];
    assert_eq!(win_rate(&trades), 0);
    assert_eq!(win_rate(&[]), 0);
}

#[test]
fn test_calendar_month_totals() {
    let trades = sample_journal();
    let march = CalendarMonth::build(&trades, MonthCursor::new(2024, 3).unwrap());

    let day5 = march.day(5).unwrap();
    assert_eq!(day5.total_pnl, dec!(6));
    assert_eq!(day5.trade_count, 2);

    let busy_days: Vec<u32> = march
        .days
        .iter()
        .filter(|d| d.trade_count > 0)
        .map(|d| d.day)
        .collect();
    assert_eq!(busy_days, vec![1, 5, 12]);

    let month_total: Decimal = march.days.iter().map(|d| d.total_pnl).sum();
    assert_eq!(month_total, dec!(-9.5));
}

#[test]
fn test_month_navigation_wraps_year() {
    let cursor = MonthCursor::new(2024, 1).unwrap().prev();
    assert_eq!(cursor.label(), "December 2023");
    assert_eq!(cursor.next().next().label(), "February 2024");
}

#[test]
fn test_analysis_report() {
    let report = AnalysisReport::build(&sample_journal());

    let pairs: Vec<(&str, Decimal)> = report
        .by_pair
        .iter()
        .map(|g| (g.name.as_str(), g.pnl))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("XAUUSD", dec!(35)),
            ("GBPUSD", dec!(10)),
            ("EURUSD", dec!(-19.5))
        ]
    );

    let strategies: Vec<&str> = report.by_strategy.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(strategies, vec!["Breakout", "Reversal", "Unknown"]);

    // Date order: t1 (BE), t3 (-4), t2 (+10), t4 (-15.5), t5 (+35); t3 precedes t2 in the list
    let rates: Vec<u32> = report.rolling.iter().map(|p| p.win_rate).collect();
    assert_eq!(rates, vec![0, 0, 33, 25, 40]);
    assert_eq!(report.rolling.last().map(|p| p.trade), Some(5));
}
