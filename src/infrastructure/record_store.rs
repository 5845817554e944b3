use crate::domain::category::Roster;
use crate::domain::daily_record::DailyRecord;
use crate::domain::errors::StoreError;
use crate::domain::record::Record;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const FILE_EXTENSION: &str = "txt";

/// What to do with a line whose counts do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Skip the line and log a warning.
    #[default]
    Lenient,
    /// Fail the whole load.
    Strict,
}

/// Outcome of parsing one line of a day file.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Tally(&'a str, Record),
    /// No colon: not a record line at all.
    Ignored,
    /// Has a colon but the counts are unreadable.
    Malformed,
}

/// Parses `Name: <wins>W - <losses>L`.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let Some((name, counts)) = line.trim().split_once(':') else {
        return ParsedLine::Ignored;
    };

    let counts = counts.trim().replace(['W', 'L'], "");
    let Some((wins, losses)) = counts.split_once('-') else {
        return ParsedLine::Malformed;
    };

    match (wins.trim().parse::<u32>(), losses.trim().parse::<u32>()) {
        (Ok(wins), Ok(losses)) => ParsedLine::Tally(name.trim(), Record::new(wins, losses)),
        _ => ParsedLine::Malformed,
    }
}

pub fn format_line(name: &str, record: Record) -> String {
    format!("{}: {}W - {}L\n", name, record.wins, record.losses)
}

/// Flat-file storage with one `<date>.txt` per day.
pub struct RecordStore {
    dir: PathBuf,
    roster: Roster,
    policy: ParsePolicy,
}

impl RecordStore {
    /// Opens the store, creating the data directory when missing.
    pub fn open(
        dir: impl Into<PathBuf>,
        roster: Roster,
        policy: ParsePolicy,
    ) -> Result<Self, StoreError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
            info!("Created data directory {:?}", dir);
        }

        Ok(Self {
            dir,
            roster,
            policy,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn path_for(&self, date: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", date, FILE_EXTENSION))
    }

    /// Loads a day. A missing file is an all-zero record.
    pub fn load(&self, date: &str) -> Result<DailyRecord, StoreError> {
        self.read_file(&self.path_for(date))
    }

    /// Overwrites the day file with one line per roster category.
    pub fn save(&self, date: &str, record: &DailyRecord) -> Result<(), StoreError> {
        let path = self.path_for(date);
        let content: String = self
            .roster
            .iter()
            .map(|name| format_line(name, record.get(name).unwrap_or_default()))
            .collect();

        fs::write(&path, content).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        info!("Saved results to {:?}", path);
        Ok(())
    }

    /// Basenames of every persisted day file.
    pub fn list_dates(&self) -> Result<BTreeSet<String>, StoreError> {
        Ok(self
            .day_files()?
            .into_iter()
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect())
    }

    /// Sum of every persisted day file.
    pub fn compute_overall(&self) -> Result<DailyRecord, StoreError> {
        let mut overall = DailyRecord::empty(&self.roster);
        let files = self.day_files()?;
        for path in &files {
            overall.merge(&self.read_file(path)?);
        }
        debug!("Computed overall from {} day files", files.len());
        Ok(overall)
    }

    fn day_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            let is_day_file = path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(FILE_EXTENSION);
            if is_day_file {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<DailyRecord, StoreError> {
        let mut record = DailyRecord::empty(&self.roster);

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No results file at {:?}, starting from zero", path);
                return Ok(record);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        for (idx, line) in content.lines().enumerate() {
            match parse_line(line) {
                // Repeated names add up, as lines do across files in compute_overall
                ParsedLine::Tally(name, tally) => {
                    if !record.add(name, tally) {
                        debug!("Ignoring unknown category {:?} in {:?}", name, path);
                    }
                }
                ParsedLine::Ignored => {}
                ParsedLine::Malformed => match self.policy {
                    ParsePolicy::Strict => {
                        return Err(StoreError::MalformedCounts {
                            path: path.to_path_buf(),
                            line: idx + 1,
                            content: line.to_string(),
                        });
                    }
                    ParsePolicy::Lenient => {
                        warn!(
                            "Skipping malformed line {} in {:?}: {:?}",
                            idx + 1,
                            path,
                            line
                        );
                    }
                },
            }
        }

        Ok(record)
    }
}
