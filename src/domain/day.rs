use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

pub const OVERALL_LABEL: &str = "Overall";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the tracker is currently showing: one day's file or the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySelection {
    Date(NaiveDate),
    Overall,
}

impl DaySelection {
    pub fn is_overall(&self) -> bool {
        matches!(self, DaySelection::Overall)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DaySelection::Date(d) => Some(*d),
            DaySelection::Overall => None,
        }
    }
}

impl fmt::Display for DaySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelection::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            DaySelection::Overall => f.write_str(OVERALL_LABEL),
        }
    }
}

impl FromStr for DaySelection {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == OVERALL_LABEL {
            return Ok(DaySelection::Overall);
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(DaySelection::Date)
    }
}
