//! Header block parsing
//!
//! A header is the contiguous run of comment lines at the top of a file that
//! look like `<comment> Key: value`. The first line that does not match ends
//! the block; nothing after it is ever treated as a header, even if it looks
//! like one.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::{parse_commit_date, ArtifactSnapshot, HeaderField};
use crate::syntax::{Language, LanguageRegistry};

/// Values collected from a header block, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderBlock {
    pub commit: Option<String>,
    pub commit_date: Option<(NaiveDate, String)>,
    pub source_file: Option<String>,
    pub source_link: Option<String>,
    pub doc_author: Option<String>,
    /// Index of the first line after the block
    pub end_line: usize,
}

impl HeaderBlock {
    /// Required fields that were never seen
    pub fn missing(&self) -> BTreeSet<HeaderField> {
        let present = [
            (HeaderField::Commit, self.commit.is_some()),
            (HeaderField::CommitDate, self.commit_date.is_some()),
            (HeaderField::SourceFile, self.source_file.is_some()),
            (HeaderField::SourceLink, self.source_link.is_some()),
            (HeaderField::DocAuthor, self.doc_author.is_some()),
        ];
        present
            .into_iter()
            .filter(|&(_, seen)| !seen)
            .map(|(field, _)| field)
            .collect()
    }
}

/// Scan the leading header block of `contents`.
///
/// A `CommitDate` that does not parse is an error as soon as it is seen.
/// Repeated keys keep the last value.
pub fn scan_header(path: &Path, contents: &str, language: &Language) -> Result<HeaderBlock> {
    let mut block = HeaderBlock::default();
    let mut line_count = 0;

    for (i, line) in contents.lines().enumerate() {
        line_count = i + 1;
        let Some((key, value)) = language.parse_header_line(line) else {
            block.end_line = i;
            return Ok(block);
        };

        match HeaderField::from_key(key) {
            Some(HeaderField::Commit) => block.commit = Some(value.to_string()),
            Some(HeaderField::CommitDate) => {
                let date = parse_commit_date(value).map_err(|source| {
                    tracing::warn!("Error parsing line: {}", line);
                    Error::InvalidCommitDate {
                        path: path.to_path_buf(),
                        value: value.to_string(),
                        source,
                    }
                })?;
                block.commit_date = Some((date, value.to_string()));
            }
            Some(HeaderField::SourceFile) => block.source_file = Some(value.to_string()),
            Some(HeaderField::SourceLink) => block.source_link = Some(value.to_string()),
            Some(HeaderField::DocAuthor) => block.doc_author = Some(value.to_string()),
            None => {
                tracing::debug!("{}:{}: ignoring unknown header {:?}", path.display(), i + 1, key);
            }
        }
    }

    // Every line was a header line: there is no body
    block.end_line = line_count;
    Ok(block)
}

/// Parse and validate the header of one snapshot file's contents
pub fn parse_header(
    artifact_name: &str,
    path: &Path,
    contents: &str,
    language: &Language,
) -> Result<ArtifactSnapshot> {
    let block = scan_header(path, contents, language)?;
    let missing = block.missing();

    match block {
        HeaderBlock {
            commit: Some(commit),
            commit_date: Some((commit_date, commit_date_string)),
            source_file: Some(source_file_name),
            source_link: Some(source_link),
            doc_author: Some(doc_author),
            end_line,
        } => Ok(ArtifactSnapshot {
            artifact_name: artifact_name.to_string(),
            commit,
            commit_date,
            commit_date_string,
            source_file_name,
            source_link,
            doc_author,
            doc_file: path.to_path_buf(),
            first_code_line: end_line,
        }),
        _ => Err(Error::MissingHeaders {
            path: path.to_path_buf(),
            missing: missing.into_iter().collect(),
        }),
    }
}

/// Read a snapshot file from disk and parse its header
pub fn read_snapshot(
    artifact_name: &str,
    path: &Path,
    registry: &LanguageRegistry,
) -> Result<ArtifactSnapshot> {
    let language = registry
        .from_path(path)
        .ok_or_else(|| Error::UnsupportedLanguage {
            path: path.to_path_buf(),
        })?;
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_header(artifact_name, path, &contents, language)
}
