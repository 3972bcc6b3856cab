//! Revision model - snapshots, their headers, and artifact grouping
//!
//! A snapshot is created once from a file's header block and is read-only
//! from then on. The catalog groups snapshots into artifacts and hands each
//! page its list of sibling revisions.

pub mod catalog;
pub mod snapshot;

pub use catalog::{ArtifactGroup, Catalog, RenderJob};
pub use snapshot::{
    parse_commit_date, ArtifactSnapshot, CommitDateError, HeaderField, COMMIT_DATE_FORMAT,
};
