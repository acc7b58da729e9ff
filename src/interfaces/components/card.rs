use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Rounded panel with an optional heading row
pub struct Card {
    title: Option<String>,
    icon: Option<&'static str>,
    accent: egui::Color32,
    min_height: f32,
    muted: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            icon: None,
            accent: DesignSystem::ACCENT_PRIMARY,
            min_height: 0.0,
            muted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Glyph drawn before the title in the accent colour
    pub fn icon(mut self, icon: &'static str, accent: egui::Color32) -> Self {
        self.icon = Some(icon);
        self.accent = accent;
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Dimmed background, used for completed goals
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let mut frame = DesignSystem::card_frame();
        if self.muted {
            frame = frame.fill(DesignSystem::BG_CARD_MUTED);
        }

        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            if self.min_height > 0.0 {
                ui.set_min_height(self.min_height);
            }

            if let Some(title) = self.title {
                ui.horizontal(|ui| {
                    if let Some(icon) = self.icon {
                        ui.label(egui::RichText::new(icon).size(18.0).color(self.accent));
                    }
                    ui.label(
                        egui::RichText::new(title)
                            .size(18.0)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                });
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.separator();
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
