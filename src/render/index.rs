//! Artifact index pages and the top-level landing page

use std::fmt::Write;

use crate::model::{ArtifactGroup, Catalog};
use crate::util::escape_html;

/// `<artifact>/index.html`: every revision of one artifact, newest first
pub fn render_artifact_index(group: &ArtifactGroup, stylesheet: &str) -> String {
    let name = escape_html(group.name());
    let mut items = String::new();
    for snapshot in group.snapshots() {
        let _ = writeln!(
            items,
            r#"          <li><a href="{}">{} ({})</a></li>"#,
            escape_html(&snapshot.page_file_name()),
            escape_html(&snapshot.commit_date_string),
            escape_html(&snapshot.source_file_name),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{name}</title>
  <meta http-equiv="content-type" content="text/html; charset=UTF-8">
  <link rel="stylesheet" media="all" href="../{stylesheet}" />
</head>
<body>
  <div id="container">
    <div id="background"></div>
    <div id="content">
      <h1>{name}</h1>
      <p>Notes are available for these revisions (commits):</p>
      <ul>
{items}      </ul>
    </div>
  </div>
</body>
</html>
"#,
        stylesheet = escape_html(stylesheet),
    )
}

/// `index.html` in the output root: one link per artifact, by name
pub fn render_landing(catalog: &Catalog, stylesheet: &str) -> String {
    let mut items = String::new();
    for name in catalog.artifact_names() {
        let name = escape_html(name);
        let _ = writeln!(
            items,
            r#"          <li><a href="{name}/index.html">{name}</a></li>"#
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>lazylit</title>
  <meta http-equiv="content-type" content="text/html; charset=UTF-8">
  <link rel="stylesheet" media="all" href="{stylesheet}" />
</head>
<body>
  <div id="container">
    <div id="background"></div>
    <div id="content">
      <h1>lazylit</h1>
      <p>
        Each page here is a set of notes written against one revision of a
        source file that lives elsewhere. Pick an artifact to see which
        revisions have notes:
      </p>
      <ul>
{items}      </ul>
      <p class="footnote">
        Artifact links lead to an index page, so the address stays the same
        even when the documented file is renamed between revisions.
      </p>
    </div>
  </div>
</body>
</html>
"#,
        stylesheet = escape_html(stylesheet),
    )
}
