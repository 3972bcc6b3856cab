//! Language identification and comment syntax
//!
//! Maps file extensions to language descriptors. Every matcher a descriptor
//! carries is derived from its comment symbol when the registry is built and
//! never changes afterwards, so the registry can be read from any thread.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::escape_html;

/// Suffix appended to the comment symbol to form the divider line
pub const DIVIDER_SUFFIX: &str = "DIVIDER";

/// Comment classes the highlighter may wrap a divider in
const DIVIDER_CLASSES: &str = "c|c1|cm|cs";

/// Table row: (highlighter name, comment symbol, extensions)
pub type LanguageEntry = (&'static str, &'static str, &'static [&'static str]);

const BUILTIN_LANGUAGES: &[LanguageEntry] = &[
    ("go", "//", &["go"]),
    ("python", "#", &["py"]),
    ("rust", "//", &["rs"]),
    ("c", "//", &["c", "h"]),
    ("java", "//", &["java"]),
    ("bash", "#", &["sh", "bash"]),
];

static REGISTRY: Lazy<LanguageRegistry> = Lazy::new(|| {
    LanguageRegistry::from_table(BUILTIN_LANGUAGES)
        .expect("built-in language table produces valid matchers")
});

/// A supported language and its derived comment matchers
#[derive(Debug, Clone)]
pub struct Language {
    name: &'static str,
    symbol: &'static str,
    extensions: &'static [&'static str],
    comment_matcher: Regex,
    divider_text: String,
    divider_html: Regex,
    header_matcher: Regex,
}

impl Language {
    pub fn new(
        name: &'static str,
        symbol: &'static str,
        extensions: &'static [&'static str],
    ) -> Result<Self, regex::Error> {
        let sym = regex::escape(symbol);
        let rendered_sym = regex::escape(&escape_html(symbol));

        let comment_matcher = Regex::new(&format!(r"^\s*{sym}\s?"))?;
        let header_matcher = Regex::new(&format!(r"^\s*{sym}\s*(\w+):\s*(.*)$"))?;
        let divider_html = Regex::new(&format!(
            r#"\n?(?:<span class="(?:{DIVIDER_CLASSES})">{rendered_sym}{DIVIDER_SUFFIX}(?:\n</span>|</span>\n?)|{rendered_sym}{DIVIDER_SUFFIX}\n?)"#
        ))?;

        Ok(Self {
            name,
            symbol,
            extensions,
            comment_matcher,
            divider_text: format!("\n{symbol}{DIVIDER_SUFFIX}\n"),
            divider_html,
            header_matcher,
        })
    }

    /// Identifier understood by the highlighter
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Line comment prefix, e.g. `//` or `#`
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Whether `line` is a comment line
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_matcher.is_match(line)
    }

    /// Remove the comment prefix (and one following space) from a line
    pub fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        match self.comment_matcher.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }

    /// Split a header line into `(key, value)`, or `None` for a non-header line
    pub fn parse_header_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.header_matcher.captures(line)?;
        let key = caps.get(1)?.as_str();
        let value = caps.get(2).map_or("", |m| m.as_str());
        Some((key, value.trim_end()))
    }

    /// Text inserted between consecutive code blocks before highlighting
    pub fn divider_text(&self) -> &str {
        &self.divider_text
    }

    /// Matcher for the divider as it appears in highlighted output
    pub fn divider_html(&self) -> &Regex {
        &self.divider_html
    }
}

/// Read-only lookup of languages by extension or name
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    by_extension: HashMap<&'static str, usize>,
}

impl LanguageRegistry {
    /// The process-wide registry of built-in languages
    pub fn global() -> &'static LanguageRegistry {
        &REGISTRY
    }

    pub fn from_table(table: &[LanguageEntry]) -> Result<Self, regex::Error> {
        let mut languages = Vec::with_capacity(table.len());
        let mut by_extension = HashMap::new();
        for (idx, &(name, symbol, extensions)) in table.iter().enumerate() {
            languages.push(Language::new(name, symbol, extensions)?);
            for ext in extensions {
                by_extension.insert(*ext, idx);
            }
        }
        Ok(Self {
            languages,
            by_extension,
        })
    }

    /// Look up by extension (without the dot, case-insensitive)
    pub fn from_extension(&self, ext: &str) -> Option<&Language> {
        let ext = ext.to_lowercase();
        self.by_extension
            .get(ext.as_str())
            .map(|&idx| &self.languages[idx])
    }

    /// Look up by file path
    pub fn from_path(&self, path: &Path) -> Option<&Language> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.from_extension(ext))
    }

    /// Look up by highlighter name
    pub fn by_name(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }
}
