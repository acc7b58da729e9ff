//! Versioned encoding of the `trades` document.
//!
//! Schema 1 is the bare JSON array written by the browser journal. Its
//! records drifted over time (`screenshotUrl` vs `screenshot`, `thoughts`,
//! `setup`, `riskReward`, `type`) and numbers that failed to parse were
//! written as `null`. Schema 2 wraps the canonical records in an envelope:
//!
//! ```json
//! { "schemaVersion": 2, "trades": [ ... ] }
//! ```
//!
//! Loading always migrates to schema 2; saving always writes schema 2.

use crate::domain::errors::JournalError;
use crate::domain::journal::{Trade, TradeStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{info, warn};

pub const TRADES_SCHEMA_VERSION: u64 = 2;

const LEGACY_SCHEMA_VERSION: u64 = 1;
const TRADES_KEY: &str = "trades";

/// Placeholder the legacy trade-log form wrote into `setup`
const LEGACY_SETUP_PLACEHOLDER: &str = "Manual";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TradesDocument<'a> {
    schema_version: u64,
    trades: &'a [Trade],
}

pub fn encode_trades(trades: &[Trade]) -> Result<String, JournalError> {
    serde_json::to_string(&TradesDocument {
        schema_version: TRADES_SCHEMA_VERSION,
        trades,
    })
    .map_err(|e| JournalError::Serialization {
        key: TRADES_KEY.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a stored trades document of any known schema version.
///
/// Individual records that cannot be migrated are skipped with a warning.
pub fn decode_trades(raw: &str) -> Result<Vec<Trade>, JournalError> {
    let document: Value = serde_json::from_str(raw).map_err(|e| JournalError::Serialization {
        key: TRADES_KEY.to_string(),
        reason: e.to_string(),
    })?;

    let (version, records) = split_document(document)?;
    let records: Vec<Value> = match version {
        LEGACY_SCHEMA_VERSION => {
            let total = records.len();
            let migrated: Vec<Value> = records.into_iter().filter_map(migrate_v1_record).collect();
            info!(
                "Migrated {} of {} legacy trade records to schema {}",
                migrated.len(),
                total,
                TRADES_SCHEMA_VERSION
            );
            migrated
        }
        TRADES_SCHEMA_VERSION => records,
        other => {
            return Err(JournalError::Serialization {
                key: TRADES_KEY.to_string(),
                reason: format!("unsupported schema version {}", other),
            });
        }
    };

    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Trade>(record) {
            Ok(trade) => Some(trade),
            Err(e) => {
                warn!("Skipping unreadable trade record: {}", e);
                None
            }
        })
        .collect())
}

fn split_document(document: Value) -> Result<(u64, Vec<Value>), JournalError> {
    match document {
        Value::Array(records) => Ok((LEGACY_SCHEMA_VERSION, records)),
        Value::Object(mut map) => {
            let version = map
                .get("schemaVersion")
                .and_then(Value::as_u64)
                .ok_or_else(|| JournalError::Serialization {
                    key: TRADES_KEY.to_string(),
                    reason: "missing schemaVersion".to_string(),
                })?;
            match map.remove(TRADES_KEY) {
                Some(Value::Array(records)) => Ok((version, records)),
                _ => Err(JournalError::Serialization {
                    key: TRADES_KEY.to_string(),
                    reason: "missing trades array".to_string(),
                }),
            }
        }
        _ => Err(JournalError::Serialization {
            key: TRADES_KEY.to_string(),
            reason: "expected an array or a versioned object".to_string(),
        }),
    }
}

/// Rewrite one schema-1 record into the schema-2 shape
fn migrate_v1_record(record: Value) -> Option<Value> {
    let Value::Object(mut map) = record else {
        warn!("Dropping legacy trade record that is not an object");
        return None;
    };

    let id = match map.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            warn!("Dropping legacy trade record without id");
            return None;
        }
    };
    map.insert("id".to_string(), Value::String(id));

    if !matches!(map.get("date"), Some(Value::String(s)) if !s.trim().is_empty()) {
        warn!("Dropping legacy trade record without date");
        return None;
    }

    if !matches!(map.get("pair"), Some(Value::String(_))) {
        map.insert("pair".to_string(), Value::String(String::new()));
    }

    // Asset class was stored under `type`
    if let Some(Value::String(kind)) = map.remove("type")
        && matches!(kind.as_str(), "Forex" | "Crypto" | "Stock")
    {
        map.insert("assetClass".to_string(), Value::String(kind));
    }

    for field in ["entry", "exitPrice", "lotSize", "pnl"] {
        let value = decimal_string(map.get(field)).unwrap_or_else(|| "0".to_string());
        map.insert(field.to_string(), Value::String(value));
    }

    // The legacy form turned blank stop/target inputs into 0
    for field in ["stopLoss", "takeProfit"] {
        match decimal_string(map.get(field)) {
            Some(v) if Decimal::from_str(&v).is_ok_and(|d| !d.is_zero()) => {
                map.insert(field.to_string(), Value::String(v));
            }
            _ => {
                map.remove(field);
            }
        }
    }

    if !matches!(map.get("direction"), Some(Value::String(d)) if d == "Long" || d == "Short") {
        map.insert("direction".to_string(), Value::String("Long".to_string()));
    }

    let status_ok = matches!(
        map.get("status"),
        Some(Value::String(s)) if matches!(s.as_str(), "Win" | "Loss" | "BE")
    );
    if !status_ok {
        let pnl = map
            .get("pnl")
            .and_then(Value::as_str)
            .and_then(|s| Decimal::from_str(s).ok())
            .unwrap_or_default();
        map.insert(
            "status".to_string(),
            Value::String(TradeStatus::from_pnl(pnl).to_string()),
        );
    }

    rename_text_field(&mut map, "screenshotUrl", "screenshot");
    rename_text_field(&mut map, "thoughts", "notes");

    if let Some(Value::String(setup)) = map.remove("setup")
        && setup != LEGACY_SETUP_PLACEHOLDER
    {
        fill_text_field(&mut map, "strategy", setup);
    }

    map.remove("riskReward");

    for field in ["strategy", "notes", "screenshot"] {
        if !matches!(map.get(field), Some(Value::String(s)) if !s.trim().is_empty()) {
            map.remove(field);
        }
    }

    Some(Value::Object(map))
}

/// Move `from` into `to` unless `to` already holds text
fn rename_text_field(map: &mut Map<String, Value>, from: &str, to: &str) {
    if let Some(Value::String(value)) = map.remove(from) {
        fill_text_field(map, to, value);
    }
}

fn fill_text_field(map: &mut Map<String, Value>, field: &str, value: String) {
    let occupied = matches!(map.get(field), Some(Value::String(s)) if !s.trim().is_empty());
    if !occupied && !value.trim().is_empty() {
        map.insert(field.to_string(), Value::String(value));
    }
}

fn decimal_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            Decimal::from_str(trimmed).ok().map(|_| trimmed.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journal::Direction;
    use rust_decimal_macros::dec;

    const LEGACY_DOCUMENT: &str = r#"[
        {
            "id": "a1", "date": "2024-03-05", "pair": "EURUSD", "direction": "Short",
            "entry": 1.0900, "exitPrice": 1.0850, "stopLoss": 0, "takeProfit": 1.08,
            "exitPriceNote": "ignored", "lotSize": null, "pnl": 0.005, "status": "Win",
            "strategy": "", "setup": "London Open", "riskReward": 0,
            "screenshotUrl": "https://imgur.com/x.png", "thoughts": "patient entry"
        },
        {
            "id": "a2", "date": "2024-03-06", "pair": "BTCUSD", "type": "Crypto",
            "direction": "Long", "entry": 100, "exitPrice": 90, "lotSize": 2,
            "pnl": -10, "setup": "Manual", "screenshot": "data:image/png;base64,AAAA"
        },
        { "date": "2024-03-07", "pair": "NOID" },
        "not a record"
    ]"#;

    #[test]
    fn test_legacy_array_is_migrated() {
        let trades = decode_trades(LEGACY_DOCUMENT).unwrap();
        assert_eq!(trades.len(), 2);

        let first = &trades[0];
        assert_eq!(first.id, "a1");
        assert_eq!(first.direction, Direction::Short);
        assert_eq!(first.lot_size, Decimal::ZERO);
        assert_eq!(first.pnl, dec!(0.005));
        assert_eq!(first.stop_loss, None);
        assert_eq!(first.take_profit, Some(dec!(1.08)));
        assert_eq!(first.strategy.as_deref(), Some("London Open"));
        assert_eq!(first.notes.as_deref(), Some("patient entry"));
        assert_eq!(first.screenshot.as_deref(), Some("https://imgur.com/x.png"));

        let second = &trades[1];
        assert_eq!(second.status, TradeStatus::Loss);
        assert_eq!(second.strategy, None);
        assert_eq!(
            second.asset_class,
            Some(crate::domain::journal::AssetClass::Crypto)
        );
        assert!(second.has_embedded_screenshot());
    }

    #[test]
    fn test_encode_writes_current_schema() {
        let trades = decode_trades(LEGACY_DOCUMENT).unwrap();
        let encoded = encode_trades(&trades).unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["schemaVersion"], TRADES_SCHEMA_VERSION);
        assert_eq!(value["trades"].as_array().unwrap().len(), 2);

        let reloaded = decode_trades(&encoded).unwrap();
        assert_eq!(reloaded, trades);
    }

    #[test]
    fn test_unknown_schema_version_is_rejected() {
        let err = decode_trades(r#"{"schemaVersion": 9, "trades": []}"#).unwrap_err();
        assert!(err.to_string().contains("unsupported schema version 9"));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(decode_trades("{not json").is_err());
        assert!(decode_trades("42").is_err());
        assert!(decode_trades(r#"{"trades": []}"#).is_err());
    }
}
