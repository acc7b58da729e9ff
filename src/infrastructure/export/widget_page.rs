use crate::domain::errors::JournalError;
use crate::domain::widgets::EmbeddedWidget;
use std::fs;
use std::path::Path;
use tracing::info;

/// Build a standalone page that injects every widget the way TradingView
/// documents it: a container div plus a script tag carrying the JSON config.
pub fn render_widget_page(widgets: &[EmbeddedWidget]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>TradePulse Markets</title>\n<style>\n\
         body { background: #0a0c10; color: #f0f6fc; font-family: sans-serif; margin: 0; padding: 12px; }\n\
         section { background: #161b22; border: 1px solid #30363d; border-radius: 8px; margin-bottom: 12px; height: 480px; }\n\
         section.ticker-tape { height: 72px; }\n\
         h2 { font-size: 14px; margin: 8px 12px; }\n\
         </style>\n</head>\n<body>\n",
    );

    for widget in widgets {
        // `</` inside a script body would terminate the tag
        let config = widget.config.to_string().replace("</", "<\\/");
        html.push_str(&format!(
            "<section class=\"{id}\">\n<h2>{title}</h2>\n\
             <div class=\"tradingview-widget-container\" id=\"{id}\">\n\
             <div class=\"tradingview-widget-container__widget\"></div>\n\
             <script type=\"text/javascript\" src=\"{src}\" async>\n{config}\n</script>\n\
             </div>\n</section>\n",
            id = widget.kind.container_id(),
            title = widget.kind.title(),
            src = widget.kind.script_src(),
            config = config,
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

pub fn write_widget_page(widgets: &[EmbeddedWidget], path: &Path) -> Result<(), JournalError> {
    fs::write(path, render_widget_page(widgets)).map_err(|e| JournalError::Export {
        reason: format!("{}: {}", path.display(), e),
    })?;
    info!("Wrote market widget page to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::widgets::{WidgetKind, default_widgets};

    #[test]
    fn test_page_embeds_every_widget_script() {
        let html = render_widget_page(&default_widgets());
        for kind in [
            WidgetKind::TickerTape,
            WidgetKind::Timeline,
            WidgetKind::EconomicCalendar,
            WidgetKind::AdvancedChart,
        ] {
            assert!(html.contains(kind.script_src()));
            assert!(html.contains(&format!("id=\"{}\"", kind.container_id())));
        }
        assert!(html.contains("\"proName\":\"FX_IDC:EURUSD\""));
    }

    #[test]
    fn test_script_terminator_is_escaped() {
        let widget = EmbeddedWidget {
            kind: WidgetKind::Timeline,
            config: serde_json::json!({ "note": "</script><b>" }),
        };
        let html = render_widget_page(&[widget]);
        assert!(html.contains("<\\/script><b>"));
    }
}
