//! In-app mirror of the tracing output.

use crate::interfaces::design_system::DesignSystem;
use crossbeam_channel::Receiver;
use eframe::egui;

const MAX_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    All,
    Warn,
    Error,
}

impl LevelFilter {
    fn label(&self) -> &'static str {
        match self {
            LevelFilter::All => "ALL",
            LevelFilter::Warn => "WARN",
            LevelFilter::Error => "ERROR",
        }
    }

    fn accepts(&self, line: &str) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Warn => line.contains("WARN") || line.contains("ERROR"),
            LevelFilter::Error => line.contains("ERROR"),
        }
    }
}

/// Log lines received from the channel writer
pub struct ActivityLog {
    rx: Receiver<String>,
    lines: Vec<String>,
    filter: LevelFilter,
    collapsed: bool,
}

impl ActivityLog {
    pub fn new(rx: Receiver<String>) -> Self {
        Self {
            rx,
            lines: Vec::new(),
            filter: LevelFilter::All,
            collapsed: true,
        }
    }

    /// Drain pending lines, keeping the newest `MAX_LINES`
    pub fn drain(&mut self) {
        while let Ok(line) = self.rx.try_recv() {
            self.lines.push(line.trim_end().to_string());
        }
        if self.lines.len() > MAX_LINES {
            let excess = self.lines.len() - MAX_LINES;
            self.lines.drain(0..excess);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("activity_log_panel")
            .resizable(true)
            .default_height(180.0)
            .min_height(60.0)
            .show_animated(ctx, !self.collapsed, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Activity").size(13.0).strong());
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    for filter in [LevelFilter::All, LevelFilter::Warn, LevelFilter::Error] {
                        if ui
                            .selectable_label(self.filter == filter, filter.label())
                            .clicked()
                        {
                            self.filter = filter;
                        }
                    }
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("activity_log_scroll")
                    .auto_shrink([false, true])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in self.lines.iter().filter(|l| self.filter.accepts(l)) {
                            let color = if line.contains("ERROR") {
                                DesignSystem::LOSS
                            } else if line.contains("WARN") {
                                egui::Color32::from_rgb(250, 204, 21)
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };
                            ui.label(egui::RichText::new(line).size(10.0).monospace().color(color));
                        }
                    });
            });

        egui::TopBottomPanel::bottom("activity_log_toggle")
            .exact_height(26.0)
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_SIDEBAR)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let text = if self.collapsed {
                        "Show activity"
                    } else {
                        "Hide activity"
                    };
                    if ui.button(egui::RichText::new(text).size(11.0)).clicked() {
                        self.collapsed = !self.collapsed;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} messages", self.lines.len()))
                                .size(10.0)
                                .color(DesignSystem::TEXT_MUTED),
                        );
                    });
                });
            });
    }
}
