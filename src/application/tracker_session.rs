use crate::domain::daily_record::DailyRecord;
use crate::domain::day::{DATE_FORMAT, DaySelection};
use crate::domain::errors::TrackerError;
use crate::domain::record::{Outcome, Record};
use crate::infrastructure::record_store::RecordStore;
use chrono::NaiveDate;
use tracing::{debug, info};

/// The tracker's state: which day is shown and its tallies.
///
/// A concrete date is editable and every increment is written straight back
/// to that day's file. `Overall` is derived from all files and read-only.
pub struct TrackerSession {
    store: RecordStore,
    today: NaiveDate,
    selection: DaySelection,
    record: DailyRecord,
}

impl TrackerSession {
    /// Opens the session on `today`.
    pub fn open(store: RecordStore, today: NaiveDate) -> Result<Self, TrackerError> {
        let selection = DaySelection::Date(today);
        let record = store.load(&selection.to_string())?;
        info!("Tracking {} for {}", store.roster(), selection);

        Ok(Self {
            store,
            today,
            selection,
            record,
        })
    }

    pub fn select(&mut self, selection: DaySelection) -> Result<(), TrackerError> {
        let record = match selection {
            DaySelection::Date(_) => self.store.load(&selection.to_string())?,
            DaySelection::Overall => self.store.compute_overall()?,
        };

        debug!("Selected {}", selection);
        self.selection = selection;
        self.record = record;
        Ok(())
    }

    /// Counts one match for `category` and saves the current day.
    ///
    /// On a failed save the in-memory tally is restored.
    pub fn increment(&mut self, category: &str, outcome: Outcome) -> Result<Record, TrackerError> {
        let date = self.selection.date().ok_or(TrackerError::ReadOnlyView)?;
        let previous = self
            .record
            .get(category)
            .ok_or_else(|| TrackerError::UnknownCategory(category.to_string()))?;
        let mut updated = previous;
        updated.record(outcome);
        self.record.set(category, updated);

        let date = date.format(DATE_FORMAT).to_string();
        if let Err(e) = self.store.save(&date, &self.record) {
            self.record.set(category, previous);
            return Err(e.into());
        }

        debug!("{} {:?} -> {}", category, outcome, updated);
        Ok(updated)
    }

    /// Persisted days plus today in ascending order, then `Overall`.
    pub fn day_options(&self) -> Result<Vec<DaySelection>, TrackerError> {
        let mut dates: Vec<NaiveDate> = self
            .store
            .list_dates()?
            .iter()
            .filter_map(|stem| match stem.parse::<DaySelection>() {
                Ok(DaySelection::Date(d)) => Some(d),
                _ => {
                    debug!("Ignoring non-date file {:?}", stem);
                    None
                }
            })
            .collect();
        dates.push(self.today);
        dates.sort();
        dates.dedup();

        let mut options: Vec<DaySelection> = dates.into_iter().map(DaySelection::Date).collect();
        options.push(DaySelection::Overall);
        Ok(options)
    }

    pub fn is_editable(&self) -> bool {
        !self.selection.is_overall()
    }

    pub fn selection(&self) -> DaySelection {
        self.selection
    }

    pub fn record(&self) -> &DailyRecord {
        &self.record
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
