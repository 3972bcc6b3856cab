//! Per-revision documentation page

use std::fmt::Write;

use crate::document::Section;
use crate::model::ArtifactSnapshot;
use crate::util::escape_html;

/// Everything a revision page shows
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub snapshot: &'a ArtifactSnapshot,
    /// Sibling revisions, newest first; no jump menu when empty
    pub other_revisions: &'a [&'a ArtifactSnapshot],
    pub sections: &'a [Section],
    /// Stylesheet file name in the output root
    pub stylesheet: &'a str,
}

/// Render a complete HTML page for one revision
pub fn render_page(data: &PageData<'_>) -> String {
    let snapshot = data.snapshot;
    let title = escape_html(snapshot.title());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <meta http-equiv="content-type" content="text/html; charset=UTF-8">
  <link rel="stylesheet" media="all" href="../{stylesheet}" />
</head>
<body>
  <div id="container">
    <div id="background"></div>
{jump_menu}    <table cellpadding="0" cellspacing="0">
      <thead>
        <tr>
          <th class="docs">
            <h1>{title}</h1>
            <p><i>Viewing notes written by {author} for {source_file} at revision <a href="{link}">{commit} ({date})</a>.{hint}</i></p>
          </th>
          <th class="code"></th>
        </tr>
      </thead>
      <tbody>
{rows}      </tbody>
    </table>
  </div>
</body>
</html>
"#,
        stylesheet = escape_html(data.stylesheet),
        jump_menu = render_jump_menu(data.other_revisions),
        author = escape_html(&snapshot.doc_author),
        source_file = escape_html(&snapshot.source_file_name),
        link = escape_html(&snapshot.source_link),
        commit = escape_html(&snapshot.commit),
        date = escape_html(&snapshot.commit_date_string),
        hint = if data.other_revisions.is_empty() {
            ""
        } else {
            " Select other revisions via the menu to the right."
        },
        rows = render_rows(data.sections),
    )
}

fn render_jump_menu(other_revisions: &[&ArtifactSnapshot]) -> String {
    if other_revisions.is_empty() {
        return String::new();
    }

    let mut links = String::new();
    for rev in other_revisions {
        let _ = writeln!(
            links,
            r#"            <a class="source" href="{}">{}</a>"#,
            escape_html(&rev.page_file_name()),
            escape_html(&rev.commit_date_string)
        );
    }

    format!(
        r#"    <div id="jump_to">
      Other revisions &hellip;
      <div id="jump_wrapper">
        <div id="jump_page">
{links}        </div>
      </div>
    </div>
"#
    )
}

fn render_rows(sections: &[Section]) -> String {
    let mut rows = String::new();
    for (i, section) in sections.iter().enumerate() {
        let index = i + 1;
        let _ = write!(
            rows,
            r##"        <tr id="section-{index}">
          <td class="docs">
            <div class="pilwrap">
              <a class="pilcrow" href="#section-{index}">&#182;</a>
            </div>
            {docs}
          </td>
          <td class="code">
            {code}
          </td>
        </tr>
"##,
            docs = section.docs_html,
            code = section.code_html,
        );
    }
    rows
}
