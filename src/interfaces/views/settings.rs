use crate::interfaces::app::AppState;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::views::render_page_title;
use eframe::egui;
use std::time::{Duration, Instant};

const CONFIRMATION_TTL: Duration = Duration::from_secs(3);

/// Display-name editor
pub struct SettingsView {
    name: String,
    saved_at: Option<Instant>,
}

impl SettingsView {
    pub fn new(current_name: &str) -> Self {
        Self {
            name: current_name.to_string(),
            saved_at: None,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        render_page_title(ui, "Settings");

        Card::new()
            .title("User Profile")
            .icon("👤", DesignSystem::ACCENT_STRATEGY)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Display Name")
                        .size(13.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.name)
                        .hint_text("Enter your name")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);

                ui.horizontal(|ui| {
                    let save = egui::Button::new(
                        egui::RichText::new("💾 Save Changes")
                            .strong()
                            .color(egui::Color32::WHITE),
                    )
                    .fill(DesignSystem::ACCENT_PRIMARY);
                    if ui.add(save).clicked() {
                        match state.store.update_profile(self.name.clone()) {
                            Ok(()) => self.saved_at = Some(Instant::now()),
                            Err(e) => state.fail("Saving profile", e),
                        }
                    }

                    if self
                        .saved_at
                        .is_some_and(|at| at.elapsed() < CONFIRMATION_TTL)
                    {
                        ui.label(
                            egui::RichText::new("✔ Profile Updated!").color(DesignSystem::PROFIT),
                        );
                        ui.ctx().request_repaint_after(Duration::from_millis(500));
                    }
                });
            });
        ui.add_space(DesignSystem::SPACING_LARGE);

        Card::new().muted(true).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("❝").size(32.0).color(DesignSystem::TEXT_MUTED));
                ui.label(
                    egui::RichText::new("Learn and grow.")
                        .size(22.0)
                        .italics()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });
    }
}
