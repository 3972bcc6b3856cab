//! Syntax highlighting module
//!
//! Provides:
//! - The language registry (extension → comment syntax and derived matchers)
//! - Tree-sitter based HTML highlighting behind the [`Highlighter`] trait
//! - Capture name → CSS class mapping
//!
//! ## Supported Languages
//!
//! - Go, Rust, C, Java (`//` comments)
//! - Python, Bash (`#` comments)

mod highlighter;
mod highlights;
mod languages;

pub use highlighter::{render_spans, HighlightError, Highlighter, Span, TreeSitterHighlighter};
pub use highlights::{
    css_class, css_class_for_capture, highlight_id_for_name, HighlightId, HIGHLIGHT_CLASSES,
    HIGHLIGHT_END, HIGHLIGHT_START,
};
pub use languages::{Language, LanguageRegistry, DIVIDER_SUFFIX};
