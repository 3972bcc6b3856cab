//! A documented revision of an artifact and its header fields

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::util::file_base_name;

/// Literal format of the `CommitDate` header, e.g. `Jul 2 2020`
pub const COMMIT_DATE_FORMAT: &str = "%b %d %Y";

/// `%Y` alone would accept years of one to four digits
static COMMIT_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3} \d{1,2} \d{4}$").expect("commit date shape is a valid regex")
});

/// The header keys every snapshot must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderField {
    Commit,
    CommitDate,
    SourceFile,
    SourceLink,
    DocAuthor,
}

impl HeaderField {
    pub const ALL: [HeaderField; 5] = [
        HeaderField::Commit,
        HeaderField::CommitDate,
        HeaderField::SourceFile,
        HeaderField::SourceLink,
        HeaderField::DocAuthor,
    ];

    /// Key as written in the header block
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderField::Commit => "Commit",
            HeaderField::CommitDate => "CommitDate",
            HeaderField::SourceFile => "SourceFile",
            HeaderField::SourceLink => "SourceLink",
            HeaderField::DocAuthor => "DocAuthor",
        }
    }

    /// Case-sensitive lookup of a header key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == key)
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a `CommitDate` value was rejected
#[derive(Debug, Error)]
pub enum CommitDateError {
    #[error("expected a date like \"Jul 2 2020\"")]
    Shape,

    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Parse a `CommitDate` header value: abbreviated month, day, four-digit year
pub fn parse_commit_date(value: &str) -> Result<NaiveDate, CommitDateError> {
    let value = value.trim();
    if !COMMIT_DATE_SHAPE.is_match(value) {
        return Err(CommitDateError::Shape);
    }
    Ok(NaiveDate::parse_from_str(value, COMMIT_DATE_FORMAT)?)
}

/// One documented revision of one artifact, read-only once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSnapshot {
    /// Name of the input subdirectory grouping revisions
    pub artifact_name: String,
    pub commit: String,
    pub commit_date: NaiveDate,
    /// `CommitDate` exactly as written, for display
    pub commit_date_string: String,
    /// Name of the documented file in its own repository
    pub source_file_name: String,
    pub source_link: String,
    pub doc_author: String,
    /// The annotated input file
    pub doc_file: PathBuf,
    /// Index of the first line after the header block
    pub first_code_line: usize,
}

impl ArtifactSnapshot {
    /// Page file name: the input file name with its last extension replaced by `.html`
    pub fn page_file_name(&self) -> String {
        let stem = self
            .doc_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{stem}.html")
    }

    /// `<output_root>/<artifact>/<page file name>`
    pub fn destination(&self, output_root: &Path) -> PathBuf {
        output_root
            .join(&self.artifact_name)
            .join(self.page_file_name())
    }

    /// Page title: base name of the documented source file
    pub fn title(&self) -> &str {
        file_base_name(&self.source_file_name)
    }
}
