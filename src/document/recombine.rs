//! Highlighting all sections at once and splitting the result back apart
//!
//! The highlighter needs the whole file to tokenize correctly, so every
//! section's code is joined into one buffer with a divider comment between
//! blocks. After highlighting, the divider's rendered form marks where each
//! section's HTML ends.
//!
//! This depends on the highlighter rendering the divider as a plain comment
//! with one of the expected classes, and on the source never containing a
//! line identical to the divider. Neither is checked.

use regex::Regex;

use super::sections::Section;
use crate::markdown::MarkdownRenderer;
use crate::syntax::{HighlightError, Highlighter, Language, HIGHLIGHT_END, HIGHLIGHT_START};

/// Join every section's code, with the language divider between consecutive blocks
pub fn join_code(sections: &[Section], language: &Language) -> String {
    let capacity = sections.iter().map(|s| s.code_text.len()).sum::<usize>()
        + sections.len() * language.divider_text().len();
    let mut buffer = String::with_capacity(capacity);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            buffer.push_str(language.divider_text());
        }
        buffer.push_str(&section.code_text);
    }
    buffer
}

/// Remove the outer highlight container, once, if present
pub fn strip_container(html: &str) -> &str {
    let inner = html.strip_prefix(HIGHLIGHT_START).unwrap_or(html);
    inner.strip_suffix(HIGHLIGHT_END).unwrap_or(inner)
}

/// Wrap a fragment in the highlight container
pub fn wrap_container(fragment: &str) -> String {
    let capacity = HIGHLIGHT_START.len() + fragment.len() + HIGHLIGHT_END.len();
    let mut out = String::with_capacity(capacity);
    out.push_str(HIGHLIGHT_START);
    out.push_str(fragment);
    out.push_str(HIGHLIGHT_END);
    out
}

/// Split unwrapped highlighter output into `section_count` fragments.
///
/// Each fragment is the text before the next divider match. When no divider
/// is found, the current fragment takes the rest of the buffer and every
/// following fragment is empty.
pub fn split_highlighted_output(html: &str, section_count: usize, divider: &Regex) -> Vec<String> {
    split_counted(html, section_count, divider).0
}

/// As [`split_highlighted_output`], also returning how many dividers matched
fn split_counted(html: &str, section_count: usize, divider: &Regex) -> (Vec<String>, usize) {
    let mut fragments = Vec::with_capacity(section_count);
    let mut found = 0;
    let mut rest = html;
    for _ in 0..section_count {
        match find_divider(rest, divider) {
            Some((start, end)) => {
                fragments.push(rest[..start].to_string());
                rest = &rest[end..];
                found += 1;
            }
            None => {
                fragments.push(rest.to_string());
                rest = "";
            }
        }
    }
    // The last fragment never ends at a divider
    (fragments, found.min(section_count.saturating_sub(1)))
}

/// First divider match that is not inside another token's span.
///
/// A bare divider inside an open span (e.g. a string literal) is text of that
/// token, and splitting there would leave unbalanced markup in both halves.
fn find_divider(rest: &str, divider: &Regex) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(m) = divider.find_at(rest, from) {
        let spanned = m.as_str().contains("<span");
        if spanned || !inside_span(&rest[..m.start()]) {
            return Some((m.start(), m.end()));
        }
        from = m.end();
    }
    None
}

fn inside_span(before: &str) -> bool {
    before.matches("<span").count() > before.matches("</span>").count()
}

/// Fill in `code_html` and `docs_html` for every section.
///
/// Returns the number of dividers found in the highlighted output. Anything
/// below `sections.len() - 1` means the trailing sections got no code.
pub fn highlight_sections(
    sections: &mut [Section],
    language: &Language,
    highlighter: &dyn Highlighter,
    markdown: &dyn MarkdownRenderer,
) -> Result<usize, HighlightError> {
    let buffer = join_code(sections, language);
    let highlighted = highlighter.highlight(language, &buffer)?;
    let (fragments, found) = split_counted(
        strip_container(&highlighted),
        sections.len(),
        language.divider_html(),
    );

    for (section, fragment) in sections.iter_mut().zip(fragments) {
        section.code_html = wrap_container(&fragment);
        section.docs_html = markdown.render(&section.docs_text);
    }
    tracing::trace!("Recombined {} sections ({} dividers)", sections.len(), found);
    Ok(found)
}
