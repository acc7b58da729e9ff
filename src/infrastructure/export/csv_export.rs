use crate::domain::errors::JournalError;
use crate::domain::journal::Trade;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Flat CSV view of a trade; the screenshot payload is left out
#[derive(Serialize)]
struct TradeCsvRow<'a> {
    id: &'a str,
    date: NaiveDate,
    pair: &'a str,
    direction: String,
    entry: Decimal,
    exit_price: Decimal,
    stop_loss: Option<Decimal>,
    take_profit: Option<Decimal>,
    lot_size: Decimal,
    pnl: Decimal,
    status: String,
    strategy: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a Trade> for TradeCsvRow<'a> {
    fn from(trade: &'a Trade) -> Self {
        Self {
            id: &trade.id,
            date: trade.date,
            pair: &trade.pair,
            direction: trade.direction.to_string(),
            entry: trade.entry,
            exit_price: trade.exit_price,
            stop_loss: trade.stop_loss,
            take_profit: trade.take_profit,
            lot_size: trade.lot_size,
            pnl: trade.pnl,
            status: trade.status.to_string(),
            strategy: trade.strategy.as_deref().unwrap_or(""),
            notes: trade.notes.as_deref().unwrap_or(""),
        }
    }
}

pub const CSV_HEADER: [&str; 13] = [
    "id",
    "date",
    "pair",
    "direction",
    "entry",
    "exit_price",
    "stop_loss",
    "take_profit",
    "lot_size",
    "pnl",
    "status",
    "strategy",
    "notes",
];

/// Write all trades as CSV, returning the number of data rows.
///
/// The header row is always written, even for an empty journal.
pub fn write_trades_csv<W: Write>(trades: &[Trade], writer: W) -> Result<usize, JournalError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| JournalError::Export {
            reason: e.to_string(),
        })?;
    for trade in trades {
        csv_writer
            .serialize(TradeCsvRow::from(trade))
            .map_err(|e| JournalError::Export {
                reason: e.to_string(),
            })?;
    }
    csv_writer.flush().map_err(|e| JournalError::Export {
        reason: e.to_string(),
    })?;
    Ok(trades.len())
}

pub fn export_trades_to_path(trades: &[Trade], path: &Path) -> Result<usize, JournalError> {
    let file = File::create(path).map_err(|e| JournalError::Export {
        reason: format!("{}: {}", path.display(), e),
    })?;
    let rows = write_trades_csv(trades, file)?;
    info!("Exported {} trades to {:?}", rows, path);
    Ok(rows)
}
