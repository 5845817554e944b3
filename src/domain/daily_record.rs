use crate::domain::category::Roster;
use crate::domain::record::Record;
use std::collections::BTreeMap;

/// Tallies for every category of a roster, for one day or in aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    tallies: BTreeMap<String, Record>,
}

impl DailyRecord {
    /// A record with every roster category at 0-0.
    pub fn empty(roster: &Roster) -> Self {
        Self {
            tallies: roster
                .iter()
                .map(|name| (name.to_string(), Record::default()))
                .collect(),
        }
    }

    pub fn get(&self, category: &str) -> Option<Record> {
        self.tallies.get(category).copied()
    }

    pub fn set(&mut self, category: &str, record: Record) -> bool {
        match self.tallies.get_mut(category) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Adds to a category's tally. Returns false for categories outside the roster.
    pub fn add(&mut self, category: &str, record: Record) -> bool {
        match self.tallies.get_mut(category) {
            Some(slot) => {
                *slot += record;
                true
            }
            None => false,
        }
    }

    /// Element-wise sum with another record of the same roster.
    pub fn merge(&mut self, other: &DailyRecord) {
        for (name, record) in other.iter() {
            self.add(name, record);
        }
    }

    /// Categories in roster (alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Record)> {
        self.tallies.iter().map(|(name, r)| (name.as_str(), *r))
    }

    pub fn totals(&self) -> Record {
        let mut sum = Record::default();
        for (_, record) in self.iter() {
            sum += record;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(["Beta", "Alpha"])
    }

    #[test]
    fn test_empty_covers_roster() {
        let record = DailyRecord::empty(&roster());
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert_eq!(record.get("Alpha"), Some(Record::default()));
        assert_eq!(record.get("Gamma"), None);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut record = DailyRecord::empty(&roster());
        assert!(!record.add("Gamma", Record::new(1, 0)));
        assert!(!record.set("Gamma", Record::new(1, 0)));
        assert_eq!(record.totals(), Record::default());
    }

    #[test]
    fn test_merge_sums_element_wise() {
        let mut a = DailyRecord::empty(&roster());
        a.set("Alpha", Record::new(2, 0));
        let mut b = DailyRecord::empty(&roster());
        b.set("Alpha", Record::new(1, 1));
        b.set("Beta", Record::new(0, 4));

        a.merge(&b);
        assert_eq!(a.get("Alpha"), Some(Record::new(3, 1)));
        assert_eq!(a.get("Beta"), Some(Record::new(0, 4)));
        assert_eq!(a.totals(), Record::new(3, 5));
    }
}
