//! Utility modules

pub mod text;

pub use text::{escape_html, file_base_name, push_escaped};
