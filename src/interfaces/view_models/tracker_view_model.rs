use crate::application::tracker_session::TrackerSession;
use crate::domain::daily_record::DailyRecord;
use crate::domain::record::Record;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub struct CategoryRow {
    pub name: String,
    pub record_text: String,
    pub percent_text: String,
    pub percent_color: egui::Color32,
}

impl CategoryRow {
    fn new(name: &str, record: Record) -> Self {
        Self {
            name: name.to_string(),
            record_text: record.to_string(),
            percent_text: format!("{}%", record.win_percentage()),
            percent_color: DesignSystem::tone_color(record.tone()),
        }
    }
}

pub struct TrackerViewModel;

impl TrackerViewModel {
    pub fn rows(session: &TrackerSession) -> Vec<CategoryRow> {
        Self::rows_for(session.record())
    }

    pub fn rows_for(record: &DailyRecord) -> Vec<CategoryRow> {
        record
            .iter()
            .map(|(name, tally)| CategoryRow::new(name, tally))
            .collect()
    }

    /// Summary line for the card title, e.g. "2024-06-01 · 7W - 3L (70%)".
    pub fn summary(session: &TrackerSession) -> String {
        let totals = session.record().totals();
        format!(
            "{} · {} ({}%)",
            session.selection(),
            totals,
            totals.win_percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Roster;

    #[test]
    fn test_rows_follow_roster_order_and_tones() {
        let roster = Roster::new(["Runecraft", "Abysscraft", "Havencraft"]);
        let mut record = DailyRecord::empty(&roster);
        record.set("Runecraft", Record::new(3, 1));
        record.set("Havencraft", Record::new(1, 1));

        let rows = TrackerViewModel::rows_for(&record);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Abysscraft", "Havencraft", "Runecraft"]);

        assert_eq!(rows[0].record_text, "0W - 0L");
        assert_eq!(rows[0].percent_text, "0%");
        assert_eq!(rows[0].percent_color, DesignSystem::DANGER);

        assert_eq!(rows[1].percent_text, "50%");
        assert_eq!(rows[1].percent_color, DesignSystem::NEUTRAL);

        assert_eq!(rows[2].record_text, "3W - 1L");
        assert_eq!(rows[2].percent_text, "75%");
        assert_eq!(rows[2].percent_color, DesignSystem::SUCCESS);
    }
}
