use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A colored pill, used for win percentages
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(13.0).strong().color(color));
        });
}

/// Square up/down button for a win or a loss
pub fn outcome_button(glyph: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(glyph)
            .size(DesignSystem::BODY_SIZE)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(fill)
    .min_size(egui::vec2(28.0, 24.0))
}
