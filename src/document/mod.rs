//! Turning one annotated file into rendered sections
//!
//! ```text
//! file contents → header::scan_header   (metadata, end of header block)
//!               → sections::parse_sections (docs/code pairs from that line)
//!               → recombine::highlight_sections (code HTML + docs HTML)
//! ```

pub mod header;
pub mod recombine;
pub mod sections;

pub use header::{parse_header, read_snapshot, scan_header, HeaderBlock};
pub use recombine::{
    highlight_sections, join_code, split_highlighted_output, strip_container, wrap_container,
};
pub use sections::{parse_sections, Section};
