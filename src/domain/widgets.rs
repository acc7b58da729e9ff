//! TradingView widget configurations.
//!
//! The widgets are rendered by remote scripts; the journal only owns the
//! configuration blobs handed to them.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    TickerTape,
    Timeline,
    EconomicCalendar,
    AdvancedChart,
}

impl WidgetKind {
    pub fn script_src(&self) -> &'static str {
        match self {
            WidgetKind::TickerTape => {
                "https://s3.tradingview.com/external-embedding/embed-widget-ticker-tape.js"
            }
            WidgetKind::Timeline => {
                "https://s3.tradingview.com/external-embedding/embed-widget-timeline.js"
            }
            WidgetKind::EconomicCalendar => {
                "https://s3.tradingview.com/external-embedding/embed-widget-events.js"
            }
            WidgetKind::AdvancedChart => {
                "https://s3.tradingview.com/external-embedding/embed-widget-advanced-chart.js"
            }
        }
    }

    pub fn container_id(&self) -> &'static str {
        match self {
            WidgetKind::TickerTape => "ticker-tape",
            WidgetKind::Timeline => "timeline-widget",
            WidgetKind::EconomicCalendar => "calendar-widget",
            WidgetKind::AdvancedChart => "advanced-chart-widget",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::TickerTape => "Ticker Tape",
            WidgetKind::Timeline => "Breaking Headlines",
            WidgetKind::EconomicCalendar => "Economic Calendar",
            WidgetKind::AdvancedChart => "Advanced Chart",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSymbol {
    pub pro_name: String,
    pub title: String,
}

impl TickerSymbol {
    fn new(pro_name: &str, title: &str) -> Self {
        Self {
            pro_name: pro_name.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerTapeConfig {
    pub symbols: Vec<TickerSymbol>,
    pub show_symbol_logo: bool,
    pub is_transparent: bool,
    pub display_mode: String,
    pub color_theme: String,
    pub locale: String,
}

impl Default for TickerTapeConfig {
    fn default() -> Self {
        Self {
            symbols: vec![
                TickerSymbol::new("FOREXCOM:SPXUSD", "S&P 500"),
                TickerSymbol::new("FOREXCOM:NSXUSD", "Nasdaq"),
                TickerSymbol::new("FX_IDC:EURUSD", "EUR/USD"),
                TickerSymbol::new("BITSTAMP:BTCUSD", "Bitcoin"),
                TickerSymbol::new("FX_IDC:XAUUSD", "Gold"),
            ],
            show_symbol_logo: true,
            is_transparent: true,
            display_mode: "adaptive".to_string(),
            color_theme: "dark".to_string(),
            locale: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub feed_mode: String,
    pub color_theme: String,
    pub is_transparent: bool,
    pub display_mode: String,
    pub width: String,
    pub height: String,
    pub locale: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            feed_mode: "all_symbols".to_string(),
            color_theme: "dark".to_string(),
            is_transparent: true,
            display_mode: "regular".to_string(),
            width: "100%".to_string(),
            height: "100%".to_string(),
            locale: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicCalendarConfig {
    pub color_theme: String,
    pub is_transparent: bool,
    pub width: String,
    pub height: String,
    pub locale: String,
    pub importance_filter: String,
}

impl Default for EconomicCalendarConfig {
    fn default() -> Self {
        Self {
            color_theme: "dark".to_string(),
            is_transparent: true,
            width: "100%".to_string(),
            height: "100%".to_string(),
            locale: "en".to_string(),
            importance_filter: "-1,0,1".to_string(),
        }
    }
}

/// Keys keep TradingView's own mix of snake_case and lowercase
#[derive(Debug, Clone, Serialize)]
pub struct AdvancedChartConfig {
    pub autosize: bool,
    pub symbol: String,
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    pub enable_publishing: bool,
    pub allow_symbol_change: bool,
    pub calendar: bool,
    pub support_host: String,
}

impl Default for AdvancedChartConfig {
    fn default() -> Self {
        Self {
            autosize: true,
            symbol: "FX:XAUUSD".to_string(),
            interval: "D".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            style: "1".to_string(),
            locale: "en".to_string(),
            enable_publishing: false,
            allow_symbol_change: true,
            calendar: false,
            support_host: "https://www.tradingview.com".to_string(),
        }
    }
}

/// A widget ready to embed: where its script lives and the opaque JSON it expects
#[derive(Debug, Clone)]
pub struct EmbeddedWidget {
    pub kind: WidgetKind,
    pub config: Value,
}

impl EmbeddedWidget {
    fn new<C: Serialize>(kind: WidgetKind, config: &C) -> Self {
        Self {
            kind,
            // Plain structs of strings and bools always serialize
            config: serde_json::to_value(config).unwrap_or(Value::Null),
        }
    }
}

/// The four widgets of the news dashboard, in page order
pub fn default_widgets() -> Vec<EmbeddedWidget> {
    vec![
        EmbeddedWidget::new(WidgetKind::TickerTape, &TickerTapeConfig::default()),
        EmbeddedWidget::new(WidgetKind::Timeline, &TimelineConfig::default()),
        EmbeddedWidget::new(WidgetKind::EconomicCalendar, &EconomicCalendarConfig::default()),
        EmbeddedWidget::new(WidgetKind::AdvancedChart, &AdvancedChartConfig::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_tape_config_keys() {
        let json = serde_json::to_value(TickerTapeConfig::default()).unwrap();
        assert_eq!(json["symbols"][0]["proName"], "FOREXCOM:SPXUSD");
        assert_eq!(json["showSymbolLogo"], true);
        assert_eq!(json["colorTheme"], "dark");
        assert_eq!(json["symbols"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_advanced_chart_keeps_snake_case_keys() {
        let json = serde_json::to_value(AdvancedChartConfig::default()).unwrap();
        assert_eq!(json["allow_symbol_change"], true);
        assert_eq!(json["support_host"], "https://www.tradingview.com");
        assert_eq!(json["symbol"], "FX:XAUUSD");
    }

    #[test]
    fn test_default_widgets_order() {
        let kinds: Vec<_> = default_widgets().iter().map(|w| w.kind).collect();
        assert_eq!(
            kinds,
            vec![
                WidgetKind::TickerTape,
                WidgetKind::Timeline,
                WidgetKind::EconomicCalendar,
                WidgetKind::AdvancedChart
            ]
        );
        assert!(default_widgets().iter().all(|w| w.config.is_object()));
    }
}
