use std::fmt;

/// Classes tracked when no roster override is configured.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Forestcraft",
    "Swordcraft",
    "Runecraft",
    "Dragoncraft",
    "Shadowcraft",
    "Abysscraft",
    "Havencraft",
    "Portalcraft",
];

/// The fixed, alphabetically ordered set of categories being tracked.
///
/// Names are trimmed, de-duplicated and sorted on construction, so iteration
/// order is always the order lines are written to a day file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

impl Roster {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_is_sorted() {
        let roster = Roster::default();
        let names: Vec<&str> = roster.iter().collect();
        assert_eq!(
            names,
            vec![
                "Abysscraft",
                "Dragoncraft",
                "Forestcraft",
                "Havencraft",
                "Portalcraft",
                "Runecraft",
                "Shadowcraft",
                "Swordcraft",
            ]
        );
    }

    #[test]
    fn test_roster_trims_and_dedups() {
        let roster = Roster::new([" Zeta", "Alpha", "Zeta ", "", "  "]);
        assert_eq!(roster.len(), 2);
        assert!(roster.contains("Alpha"));
        assert!(roster.contains("Zeta"));
        assert!(!roster.contains(" Zeta"));
        assert_eq!(roster.to_string(), "Alpha, Zeta");
    }
}
