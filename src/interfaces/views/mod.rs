//! The five sidebar destinations. Each view owns only its form state;
//! journal data lives in [`AppState`](crate::interfaces::app::AppState).

pub mod analysis;
pub mod dashboard;
pub mod news;
pub mod settings;
pub mod trade_log;

pub use analysis::AnalysisView;
pub use dashboard::DashboardView;
pub use news::NewsView;
pub use settings::SettingsView;
pub use trade_log::TradeLogView;

use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub(crate) fn render_page_title(ui: &mut egui::Ui, title: &str) {
    ui.label(
        egui::RichText::new(title)
            .size(28.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);
}

/// Open a local file in the system browser or viewer
pub(crate) fn open_local_file(ui: &egui::Ui, path: &std::path::Path) {
    let url = format!("file://{}", path.display());
    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
}
