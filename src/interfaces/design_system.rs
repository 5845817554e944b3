use crate::domain::record::Tone;
use eframe::egui;

/// Dark theme palette and spacing for the tracker window
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(10, 12, 16); // #0A0C10
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(22, 27, 34); // #161B22

    // Buttons
    pub const WIN_BUTTON: egui::Color32 = egui::Color32::from_rgb(76, 175, 80); // #4CAF50
    pub const LOSS_BUTTON: egui::Color32 = egui::Color32::from_rgb(244, 67, 54); // #F44336

    // Percentage tones
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 230, 118); // #00E676
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68); // #FF1744
    pub const NEUTRAL: egui::Color32 = egui::Color32::from_gray(150);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(100);

    // Card borders: a day is editable, Overall is derived
    pub const BORDER_EDITABLE: egui::Color32 = egui::Color32::from_rgb(48, 54, 61);
    pub const BORDER_READ_ONLY: egui::Color32 = egui::Color32::from_rgb(255, 145, 0); // #FF9100

    // --- Metrics ---

    pub const SPACING_SMALL: f32 = 8.0;
    pub const BODY_SIZE: f32 = 15.0;

    pub fn tone_color(tone: Tone) -> egui::Color32 {
        match tone {
            Tone::Winning => Self::SUCCESS,
            Tone::Losing => Self::DANGER,
            Tone::Even => Self::NEUTRAL,
        }
    }

    /// Dark visuals with card-colored inputs for the day selector
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_CARD;
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals
    }

    /// Frame around the records grid; the border shows whether it can be edited
    pub fn records_frame(editable: bool) -> egui::Frame {
        let border = if editable {
            Self::BORDER_EDITABLE
        } else {
            Self::BORDER_READ_ONLY
        };
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(8.0)
            .stroke(egui::Stroke::new(1.0, border))
            .inner_margin(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors_are_distinct() {
        let win = DesignSystem::tone_color(Tone::Winning);
        let even = DesignSystem::tone_color(Tone::Even);
        let loss = DesignSystem::tone_color(Tone::Losing);
        assert_ne!(win, even);
        assert_ne!(win, loss);
        assert_ne!(even, loss);
    }

    #[test]
    fn test_records_frame_marks_read_only_view() {
        let editable = DesignSystem::records_frame(true);
        let read_only = DesignSystem::records_frame(false);
        assert_eq!(editable.stroke.color, DesignSystem::BORDER_EDITABLE);
        assert_eq!(read_only.stroke.color, DesignSystem::BORDER_READ_ONLY);
    }
}
