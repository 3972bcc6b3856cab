//! lazylit - literate notes for other people's code
//!
//! Turns annotated snapshots of source files into static, cross-linked HTML.
//! Each snapshot starts with a comment header naming the commit it documents;
//! the rest of the file alternates documentation comments (Markdown) and code.
//! Snapshots of the same artifact link to each other, newest first.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod error;
pub mod generate;
pub mod markdown;
pub mod model;
pub mod render;
pub mod syntax;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::{FailurePolicy, GeneratorConfig};
pub use error::{Error, Result};
pub use generate::{GenerationReport, Generator};
pub use model::{ArtifactSnapshot, Catalog};
pub use syntax::{Language, LanguageRegistry};
