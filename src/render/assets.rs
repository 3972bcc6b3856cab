//! Static files written alongside the pages

/// Shared stylesheet for every page, including the highlight classes
pub const STYLESHEET: &str = include_str!("../../assets/lazylit.css");

/// Empty marker telling GitHub Pages to serve files as-is (no Jekyll)
pub const NOJEKYLL_MARKER: &str = ".nojekyll";
