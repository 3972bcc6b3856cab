//! Error taxonomy for a generation run
//!
//! Every variant is fatal to the run. The only tolerated divergence in the
//! pipeline (a divider missing from highlighted output) is handled inside the
//! recombiner and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{CommitDateError, HeaderField};
use crate::syntax::HighlightError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file or directory could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input root does not exist
    #[error("no artifacts directory found at {}", .0.display())]
    MissingInputDir(PathBuf),

    /// No language is registered for the file's extension
    #[error("{}: no language registered for this file extension", .path.display())]
    UnsupportedLanguage { path: PathBuf },

    /// One or more required header fields were absent from the header block
    #[error("{} is missing headers: {}", .path.display(), format_fields(.missing))]
    MissingHeaders {
        path: PathBuf,
        missing: Vec<HeaderField>,
    },

    /// `CommitDate` did not match the `Jul 2 2020` format
    #[error(
        "unable to parse headers for {}: invalid CommitDate {value:?}: {source}",
        .path.display()
    )]
    InvalidCommitDate {
        path: PathBuf,
        value: String,
        #[source]
        source: CommitDateError,
    },

    /// The highlighter rejected a file's code
    #[error("failed to highlight {}: {source}", .path.display())]
    Highlight {
        path: PathBuf,
        #[source]
        source: HighlightError,
    },

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The worker pool could not be started
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// Several failures collected under the collect-all policy
    #[error("{} of {total} tasks failed:\n{}", .failures.len(), format_failures(.failures))]
    Aggregate { failures: Vec<Error>, total: usize },
}

impl Error {
    /// Collapse a list of failures: a single failure is returned as-is.
    pub fn aggregate(mut failures: Vec<Error>, total: usize) -> Self {
        if failures.len() == 1 {
            if let Some(only) = failures.pop() {
                return only;
            }
        }
        Error::Aggregate { failures, total }
    }
}

fn format_fields(fields: &[HeaderField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_failures(failures: &[Error]) -> String {
    failures
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_headers_message_names_fields() {
        let err = Error::MissingHeaders {
            path: PathBuf::from("artifacts/make/Makefile.jul_2_20"),
            missing: vec![HeaderField::Commit, HeaderField::DocAuthor],
        };
        let msg = err.to_string();
        assert!(msg.contains("Makefile.jul_2_20"));
        assert!(msg.contains("Commit, DocAuthor"));
    }

    #[test]
    fn test_aggregate_of_one_is_unwrapped() {
        let err = Error::aggregate(vec![Error::Config("bad".to_string())], 4);
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_aggregate_lists_every_failure() {
        let err = Error::aggregate(
            vec![
                Error::Config("first".to_string()),
                Error::Config("second".to_string()),
            ],
            5,
        );
        let msg = err.to_string();
        assert!(msg.starts_with("2 of 5 tasks failed"));
        assert!(msg.contains("first"));
        assert!(msg.contains("second"));
    }
}
