use crate::application::tracker_session::TrackerSession;
use crate::domain::day::DaySelection;
use crate::domain::record::Outcome;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{outcome_button, render_status_pill};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::tracker_view_model::TrackerViewModel;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::time::Duration;
use tracing::error;

/// Something the user did this frame, applied after drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectDay(DaySelection),
    Record { category: String, outcome: Outcome },
}

pub struct TrackerApp {
    pub session: TrackerSession,
    pub day_options: Vec<DaySelection>,
    pub log_rx: Option<Receiver<String>>,

    // Status bar
    pub status_line: String,
    pub last_error: Option<String>,
}

impl TrackerApp {
    pub fn new(session: TrackerSession, log_rx: Option<Receiver<String>>) -> Self {
        let mut app = Self {
            session,
            day_options: Vec::new(),
            log_rx,
            status_line: String::new(),
            last_error: None,
        };
        app.refresh_day_options();
        app
    }

    pub fn apply(&mut self, action: UiAction) {
        let result = match &action {
            UiAction::SelectDay(selection) => self.session.select(*selection),
            UiAction::Record { category, outcome } => {
                self.session.increment(category, *outcome).map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.last_error = None;
                if matches!(action, UiAction::SelectDay(_)) {
                    self.refresh_day_options();
                }
            }
            Err(e) => {
                error!("{:?} failed: {}", action, e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn refresh_day_options(&mut self) {
        match self.session.day_options() {
            Ok(options) => self.day_options = options,
            Err(e) => {
                error!("Failed to list days: {}", e);
                self.last_error = Some(e.to_string());
                if self.day_options.is_empty() {
                    self.day_options = vec![
                        DaySelection::Date(self.session.today()),
                        DaySelection::Overall,
                    ];
                }
            }
        }
    }

    /// Keeps the latest log line for the status bar
    fn drain_logs(&mut self) {
        if let Some(rx) = &self.log_rx {
            while let Ok(msg) = rx.try_recv() {
                let line = msg.trim();
                if !line.is_empty() {
                    self.status_line = line.to_string();
                }
            }
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_logs();

        let mut pending: Option<UiAction> = None;

        // --- Day selector ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.horizontal(|ui| {
                ui.label("Select Day:");

                let current = self.session.selection();
                let mut selected = current;
                egui::ComboBox::from_id_salt("day_selector")
                    .selected_text(current.to_string())
                    .width(120.0)
                    .show_ui(ui, |ui| {
                        for option in &self.day_options {
                            ui.selectable_value(&mut selected, *option, option.to_string());
                        }
                    });

                if selected != current {
                    pending = Some(UiAction::SelectDay(selected));
                }
            });
            ui.add_space(DesignSystem::SPACING_SMALL);
        });

        // --- Status bar ---
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if let Some(err) = &self.last_error {
                ui.colored_label(DesignSystem::DANGER, err);
            } else {
                ui.label(
                    egui::RichText::new(&self.status_line)
                        .small()
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        });

        // --- Records ---
        egui::CentralPanel::default().show(ctx, |ui| {
            let editable = self.session.is_editable();
            let rows = TrackerViewModel::rows(&self.session);

            Card::new()
                .title(TrackerViewModel::summary(&self.session))
                .editable(editable)
                .show(ui, |ui| {
                    egui::Grid::new("records_grid")
                        .num_columns(5)
                        .spacing([6.0, 4.0])
                        .show(ui, |ui| {
                            for row in &rows {
                                ui.label(egui::RichText::new(&row.name).size(DesignSystem::BODY_SIZE));

                                if ui
                                    .add_enabled(editable, outcome_button("⬆", DesignSystem::WIN_BUTTON))
                                    .clicked()
                                {
                                    pending = Some(UiAction::Record {
                                        category: row.name.clone(),
                                        outcome: Outcome::Win,
                                    });
                                }
                                if ui
                                    .add_enabled(editable, outcome_button("⬇", DesignSystem::LOSS_BUTTON))
                                    .clicked()
                                {
                                    pending = Some(UiAction::Record {
                                        category: row.name.clone(),
                                        outcome: Outcome::Loss,
                                    });
                                }

                                ui.label(
                                    egui::RichText::new(&row.record_text)
                                        .size(DesignSystem::BODY_SIZE)
                                        .color(DesignSystem::TEXT_PRIMARY),
                                );
                                render_status_pill(ui, &row.percent_text, row.percent_color);
                                ui.end_row();
                            }
                        });
                });
        });

        if let Some(action) = pending {
            self.apply(action);
        }

        // Pick up new log lines without user input
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}

/// Applies the theme and base text sizes
pub fn configure_fonts(ctx: &egui::Context) {
    ctx.set_visuals(DesignSystem::theme());
    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            if matches!(text_style, egui::TextStyle::Body | egui::TextStyle::Button) {
                font.size = DesignSystem::BODY_SIZE;
            }
        }
    });
}
