use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A titled container; the border changes when its contents are read-only
pub struct Card {
    title: Option<String>,
    editable: bool,
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
            editable: true,
        }
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        DesignSystem::records_frame(self.editable).show(ui, |ui| {
            ui.set_width(ui.available_width());

            if let Some(title) = self.title {
                ui.label(
                    egui::RichText::new(title)
                        .size(12.0)
                        .color(DesignSystem::TEXT_SECONDARY)
                        .strong(),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
