//! Splitting a file body into documentation/code sections

use crate::syntax::Language;

/// One documentation/code pair, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Comment text with prefixes removed (Markdown)
    pub docs_text: String,
    /// Code lines exactly as written
    pub code_text: String,
    /// Rendered documentation, filled in by the recombiner
    pub docs_html: String,
    /// Highlighted code, filled in by the recombiner
    pub code_html: String,
}

impl Section {
    pub fn new(docs_text: impl Into<String>, code_text: impl Into<String>) -> Self {
        Self {
            docs_text: docs_text.into(),
            code_text: code_text.into(),
            ..Default::default()
        }
    }
}

/// Split `contents`, starting at line `start_line`, into sections.
///
/// A new section starts whenever a comment line follows code. The remainder is
/// always flushed, so at least one section is returned even for empty input.
pub fn parse_sections(contents: &str, start_line: usize, language: &Language) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut docs_text = String::new();
    let mut code_text = String::new();
    let mut has_code = false;

    for line in contents.lines().skip(start_line) {
        if language.is_comment(line) {
            if has_code {
                sections.push(Section::new(
                    std::mem::take(&mut docs_text),
                    std::mem::take(&mut code_text),
                ));
                has_code = false;
            }
            docs_text.push_str(language.strip_comment(line));
            docs_text.push('\n');
        } else {
            has_code = true;
            code_text.push_str(line);
            code_text.push('\n');
        }
    }

    sections.push(Section::new(docs_text, code_text));
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LanguageRegistry;

    fn python() -> &'static Language {
        LanguageRegistry::global().by_name("python").unwrap()
    }

    fn pairs(sections: &[Section]) -> Vec<(&str, &str)> {
        sections
            .iter()
            .map(|s| (s.docs_text.as_str(), s.code_text.as_str()))
            .collect()
    }

    #[test]
    fn test_alternating_comments_and_code() {
        let src = "# one\na = 1\n# two\n# more\nb = 2\nc = 3\n# three\nd = 4\n";
        let sections = parse_sections(src, 0, python());
        assert_eq!(
            pairs(&sections),
            vec![
                ("one\n", "a = 1\n"),
                ("two\nmore\n", "b = 2\nc = 3\n"),
                ("three\n", "d = 4\n"),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_one_empty_section() {
        let sections = parse_sections("", 0, python());
        assert_eq!(sections, vec![Section::default()]);
    }

    #[test]
    fn test_only_comments_yields_one_section_without_code() {
        let sections = parse_sections("# a\n# b\n", 0, python());
        assert_eq!(pairs(&sections), vec![("a\nb\n", "")]);
    }

    #[test]
    fn test_only_code_yields_one_section_without_docs() {
        let sections = parse_sections("import os\n\nprint(os.name)\n", 0, python());
        assert_eq!(pairs(&sections), vec![("", "import os\n\nprint(os.name)\n")]);
    }

    #[test]
    fn test_leading_code_becomes_its_own_section() {
        let sections = parse_sections("x = 1\n# doc\ny = 2\n", 0, python());
        assert_eq!(pairs(&sections), vec![("", "x = 1\n"), ("doc\n", "y = 2\n")]);
    }

    #[test]
    fn test_blank_line_counts_as_code() {
        let sections = parse_sections("# a\n\n# b\nx\n", 0, python());
        assert_eq!(pairs(&sections), vec![("a\n", "\n"), ("b\n", "x\n")]);
    }

    #[test]
    fn test_start_line_skips_header() {
        let src = "# Commit: abc\n# DocAuthor: Ada\n# doc\nx = 1\n";
        let sections = parse_sections(src, 2, python());
        assert_eq!(pairs(&sections), vec![("doc\n", "x = 1\n")]);
    }

    #[test]
    fn test_start_line_past_end() {
        let sections = parse_sections("# Commit: abc\n", 1, python());
        assert_eq!(sections.len(), 1);
        assert!(sections[0].docs_text.is_empty());
        assert!(sections[0].code_text.is_empty());
    }

    #[test]
    fn test_indented_comment_is_documentation() {
        let sections = parse_sections("def f():\n    # inner\n    return 1\n", 0, python());
        assert_eq!(
            pairs(&sections),
            vec![("", "def f():\n"), ("inner\n", "    return 1\n")]
        );
    }
}
