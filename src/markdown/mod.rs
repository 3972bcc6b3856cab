//! Markdown rendering for documentation comments
//!
//! Section prose is Markdown with the comment prefixes already removed.

mod renderer;

pub use renderer::{CommonMarkRenderer, MarkdownRenderer};
