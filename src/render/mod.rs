//! HTML output: per-revision pages, artifact indexes, the landing page,
//! and the shared stylesheet

mod assets;
mod index;
mod page;

pub use assets::{NOJEKYLL_MARKER, STYLESHEET};
pub use index::{render_artifact_index, render_landing};
pub use page::{render_page, PageData};
