use std::fs;
use tradepulse::application::trade_entry::TradeDraft;
use tradepulse::domain::widgets::default_widgets;
use tradepulse::infrastructure::export::{export_trades_to_path, write_widget_page};

#[test]
fn test_csv_export_file() {
    let dir = std::env::temp_dir().join(format!("tradepulse-export-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("trades.csv");

    let trade = TradeDraft {
        date: "2024-03-05".to_string(),
        pair: "EURUSD".to_string(),
        entry: "1.0850".to_string(),
        exit_price: "1.0900".to_string(),
        notes: "Waited for, then entered".to_string(),
        ..TradeDraft::default()
    }
    .build()
    .unwrap();

    let count = export_trades_to_path(std::slice::from_ref(&trade), &path).unwrap();
    assert_eq!(count, 1);

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,pair,direction,entry,exit_price,stop_loss,take_profit,lot_size,pnl,status,strategy,notes")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with(&format!("{},2024-03-05,EURUSD,Long,1.0850,1.0900,", trade.id)));
    assert!(row.ends_with(",\"Waited for, then entered\""));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_widget_page_file() {
    let dir = std::env::temp_dir().join(format!("tradepulse-widgets-{}", uuid::Uuid::new_v4()));
    let path = dir.join("market-widgets.html");
    fs::create_dir_all(&dir).unwrap();

    write_widget_page(&default_widgets(), &path).unwrap();
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("embed-widget-ticker-tape.js"));
    assert!(html.contains("embed-widget-advanced-chart.js"));
    assert!(html.contains("FX:XAUUSD"));

    let _ = fs::remove_dir_all(dir);
}
