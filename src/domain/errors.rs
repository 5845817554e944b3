use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing day files
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed counts in {path:?} line {line}: {content:?}")]
    MalformedCounts {
        path: PathBuf,
        line: usize,
        content: String,
    },
}

/// Errors raised by tracker actions
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("The Overall view is read-only")]
    ReadOnlyView,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_counts_formatting() {
        let error = StoreError::MalformedCounts {
            path: PathBuf::from("results_by_day/2024-06-01.txt"),
            line: 3,
            content: "Runecraft: xW - 1L".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("2024-06-01.txt"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("Runecraft"));
    }

    #[test]
    fn test_tracker_error_wraps_store_error() {
        let error: TrackerError = StoreError::Io {
            path: PathBuf::from("x.txt"),
            source: std::io::Error::other("disk full"),
        }
        .into();

        assert!(matches!(error, TrackerError::Store(_)));
        assert!(error.to_string().contains("disk full"));
    }
}
