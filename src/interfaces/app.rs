use crate::application::news_feed::NewsFeed;
use crate::application::store::JournalStore;
use crate::application::system::Application;
use crate::domain::errors::JournalError;
use crate::infrastructure::persistence::FileStorage;
use crate::interfaces::activity_log::ActivityLog;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::navigation::{View, render_sidebar};
use crate::interfaces::views::{
    AnalysisView, DashboardView, NewsView, SettingsView, TradeLogView,
};
use crossbeam_channel::Receiver;
use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::error;

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Transient banner shown above the current view
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    shown_at: Instant,
}

/// State shared by every view
pub struct AppState {
    pub store: JournalStore<FileStorage>,
    pub news: NewsFeed,
    pub widget_page: PathBuf,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    /// Log a failed operation and surface it in the banner
    pub fn fail(&mut self, action: &str, err: JournalError) {
        error!("{} failed: {}", action, err);
        self.notice = Some(Notice {
            text: format!("{}: {}", action, err),
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    pub fn data_dir(&self) -> PathBuf {
        self.store.storage().data_dir().to_path_buf()
    }
}

pub struct JournalApp {
    state: AppState,
    current_view: View,
    dashboard: DashboardView,
    analysis: AnalysisView,
    trade_log: TradeLogView,
    news: NewsView,
    settings: SettingsView,
    activity: ActivityLog,
}

impl JournalApp {
    pub fn new(app: Application, runtime: Handle, log_rx: Receiver<String>) -> Self {
        let widget_page = app.widget_page_path();
        let settings = SettingsView::new(&app.store.profile().name);
        let state = AppState {
            news: NewsFeed::new(app.headlines.clone(), runtime),
            store: app.store,
            widget_page,
            notice: None,
        };

        Self {
            state,
            current_view: View::Dashboard,
            dashboard: DashboardView::default(),
            analysis: AnalysisView::default(),
            trade_log: TradeLogView::default(),
            news: NewsView,
            settings,
            activity: ActivityLog::new(log_rx),
        }
    }

    fn render_notice(&mut self, ui: &mut egui::Ui) {
        let expired = self
            .state
            .notice
            .as_ref()
            .is_some_and(|n| n.shown_at.elapsed() > NOTICE_TTL);
        if expired {
            self.state.notice = None;
        }

        if let Some(notice) = &self.state.notice {
            let color = if notice.is_error {
                DesignSystem::LOSS
            } else {
                DesignSystem::PROFIT
            };
            egui::Frame::NONE
                .fill(color.linear_multiply(0.15))
                .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.6)))
                .corner_radius(DesignSystem::ROUNDING_SMALL)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&notice.text).color(color));
                });
            ui.add_space(DesignSystem::SPACING_MEDIUM);
        }
    }
}

impl eframe::App for JournalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        self.activity.drain();
        if self.state.news.poll() {
            ctx.request_repaint();
        }
        if self.state.news.is_loading() || self.state.notice.is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        egui::SidePanel::left("navigation_panel")
            .exact_width(220.0)
            .resizable(false)
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_SIDEBAR)
                    .inner_margin(egui::Margin::symmetric(16, 0)),
            )
            .show(ctx, |ui| {
                render_sidebar(
                    ui,
                    &mut self.current_view,
                    &self.state.store.profile().name,
                );
            });

        self.activity.render(ctx);

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.render_notice(ui);
                let view = self.current_view;
                egui::ScrollArea::vertical()
                    .id_salt("main_view_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| match view {
                        View::Dashboard => {
                            self.dashboard
                                .render(ui, &mut self.state, &mut self.current_view)
                        }
                        View::Analysis => self.analysis.render(ui, &mut self.state),
                        View::TradeLog => self.trade_log.render(ui, &mut self.state),
                        View::News => self.news.render(ui, &mut self.state),
                        View::Settings => self.settings.render(ui, &mut self.state),
                    });
            });
    }
}
