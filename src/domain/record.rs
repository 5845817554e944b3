use std::fmt;

/// Result of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// How a win percentage reads at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Winning,
    Even,
    Losing,
}

impl Tone {
    pub fn from_percentage(percent: u32) -> Self {
        match percent {
            p if p > 50 => Tone::Winning,
            50 => Tone::Even,
            _ => Tone::Losing,
        }
    }
}

/// Win/loss tally for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins = self.wins.saturating_add(1),
            Outcome::Loss => self.losses = self.losses.saturating_add(1),
        }
    }

    /// Win rate as a whole percentage, 0 when nothing has been played.
    /// Halves round to even.
    pub fn win_percentage(&self) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.wins as f64 / total as f64 * 100.0).round_ties_even() as u32
    }

    pub fn tone(&self) -> Tone {
        Tone::from_percentage(self.win_percentage())
    }
}

impl std::ops::AddAssign for Record {
    fn add_assign(&mut self, other: Self) {
        self.wins = self.wins.saturating_add(other.wins);
        self.losses = self.losses.saturating_add(other.losses);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}W - {}L", self.wins, self.losses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_percentage_and_tone() {
        let cases = [
            (Record::new(3, 0), 100, Tone::Winning),
            (Record::new(0, 0), 0, Tone::Losing),
            (Record::new(1, 1), 50, Tone::Even),
            (Record::new(3, 1), 75, Tone::Winning),
            (Record::new(1, 3), 25, Tone::Losing),
        ];
        for (record, percent, tone) in cases {
            assert_eq!(record.win_percentage(), percent, "{record}");
            assert_eq!(record.tone(), tone, "{record}");
        }
    }

    #[test]
    fn test_half_percent_rounds_to_even() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        assert_eq!(Record::new(1, 7).win_percentage(), 12);
        assert_eq!(Record::new(3, 5).win_percentage(), 38);
    }

    #[test]
    fn test_record_outcome() {
        let mut record = Record::new(2, 5);
        record.record(Outcome::Win);
        assert_eq!(record, Record::new(3, 5));
        record.record(Outcome::Loss);
        assert_eq!(record, Record::new(3, 6));
    }

    #[test]
    fn test_display() {
        assert_eq!(Record::new(12, 3).to_string(), "12W - 3L");
    }
}
