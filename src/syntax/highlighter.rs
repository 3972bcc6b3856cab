//! Tree-sitter backed HTML highlighter
//!
//! Produces one HTML blob per call, wrapped in the fixed highlight container,
//! with each captured token rendered as `<span class="...">`. Comments are
//! always emitted with the `c1` class, which is what lets the recombiner find
//! divider lines again after highlighting.

use std::collections::HashMap;

use streaming_iterator::StreamingIterator;
use thiserror::Error;
use tree_sitter::{Parser, Query, QueryCursor};

use super::highlights::{css_class_for_capture, HIGHLIGHT_END, HIGHLIGHT_START};
use super::languages::{Language, LanguageRegistry};
use crate::util::push_escaped;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("no grammar available for language {0:?}")]
    UnknownGrammar(String),

    #[error("incompatible grammar for {language}: {source}")]
    Grammar {
        language: String,
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("invalid highlight query for {language}: {source}")]
    Query {
        language: String,
        #[source]
        source: tree_sitter::QueryError,
    },

    #[error("tree-sitter could not parse {language} source")]
    Parse { language: String },
}

/// Turns a language's source text into highlighted HTML
pub trait Highlighter: Send + Sync {
    fn highlight(&self, language: &Language, code: &str) -> Result<String, HighlightError>;
}

/// A compiled grammar and its highlight query
struct Grammar {
    language: tree_sitter::Language,
    query: Query,
}

/// A highlighted byte range of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub class: &'static str,
}

fn grammar_source(name: &str) -> Option<(tree_sitter::Language, &'static str)> {
    let source = match name {
        "go" => (tree_sitter_go::LANGUAGE.into(), tree_sitter_go::HIGHLIGHTS_QUERY),
        "python" => (
            tree_sitter_python::LANGUAGE.into(),
            tree_sitter_python::HIGHLIGHTS_QUERY,
        ),
        "rust" => (
            tree_sitter_rust::LANGUAGE.into(),
            tree_sitter_rust::HIGHLIGHTS_QUERY,
        ),
        "c" => (tree_sitter_c::LANGUAGE.into(), tree_sitter_c::HIGHLIGHT_QUERY),
        "java" => (
            tree_sitter_java::LANGUAGE.into(),
            tree_sitter_java::HIGHLIGHTS_QUERY,
        ),
        "bash" => (
            tree_sitter_bash::LANGUAGE.into(),
            tree_sitter_bash::HIGHLIGHT_QUERY,
        ),
        _ => return None,
    };
    Some(source)
}

/// Highlighter with one compiled grammar per registered language.
///
/// Queries are compiled once and shared; a parser is created per call since
/// tree-sitter parsers cannot be shared between threads.
pub struct TreeSitterHighlighter {
    grammars: HashMap<&'static str, Grammar>,
}

impl TreeSitterHighlighter {
    /// Compile grammars for every language in the global registry
    pub fn new() -> Result<Self, HighlightError> {
        Self::for_registry(LanguageRegistry::global())
    }

    pub fn for_registry(registry: &LanguageRegistry) -> Result<Self, HighlightError> {
        let mut grammars = HashMap::new();
        for lang in registry.iter() {
            let (ts_lang, highlights_scm) = grammar_source(lang.name())
                .ok_or_else(|| HighlightError::UnknownGrammar(lang.name().to_string()))?;

            // Fail at startup rather than on the first page if the ABI is off
            Parser::new()
                .set_language(&ts_lang)
                .map_err(|source| HighlightError::Grammar {
                    language: lang.name().to_string(),
                    source,
                })?;

            let query =
                Query::new(&ts_lang, highlights_scm).map_err(|source| HighlightError::Query {
                    language: lang.name().to_string(),
                    source,
                })?;

            tracing::debug!(
                "Compiled {} highlight query ({} captures)",
                lang.name(),
                query.capture_names().len()
            );
            grammars.insert(
                lang.name(),
                Grammar {
                    language: ts_lang,
                    query,
                },
            );
        }
        Ok(Self { grammars })
    }

    /// Collect highlighted spans, sorted by start offset
    fn spans(
        &self,
        grammar: &Grammar,
        name: &str,
        code: &str,
    ) -> Result<Vec<Span>, HighlightError> {
        let mut parser = Parser::new();
        parser
            .set_language(&grammar.language)
            .map_err(|source| HighlightError::Grammar {
                language: name.to_string(),
                source,
            })?;
        let tree = parser.parse(code, None).ok_or_else(|| HighlightError::Parse {
            language: name.to_string(),
        })?;

        let mut spans = Vec::new();
        let mut cursor = QueryCursor::new();
        let capture_names = grammar.query.capture_names();

        // Run query and collect captures using StreamingIterator
        let mut captures = cursor.captures(&grammar.query, tree.root_node(), code.as_bytes());
        while let Some((query_match, capture_idx)) = captures.next() {
            let capture = &query_match.captures[*capture_idx];
            let Some(class) = css_class_for_capture(capture_names[capture.index as usize]) else {
                continue; // Skip unknown captures
            };
            let node = capture.node;
            if node.start_byte() < node.end_byte() {
                spans.push(Span {
                    start: node.start_byte(),
                    end: node.end_byte(),
                    class,
                });
            }
        }

        // Stable: among spans starting together, query order decides
        spans.sort_by_key(|s| s.start);
        Ok(spans)
    }
}

impl Highlighter for TreeSitterHighlighter {
    fn highlight(&self, language: &Language, code: &str) -> Result<String, HighlightError> {
        let grammar = self
            .grammars
            .get(language.name())
            .ok_or_else(|| HighlightError::UnknownGrammar(language.name().to_string()))?;
        let spans = self.spans(grammar, language.name(), code)?;
        tracing::trace!("{} spans for {} bytes of {}", spans.len(), code.len(), language.name());
        Ok(render_spans(code, &spans))
    }
}

/// Render `code` as HTML inside the highlight container.
///
/// `spans` must be sorted by start. A span overlapping one already emitted is
/// dropped, so the first capture covering a byte wins.
pub fn render_spans(code: &str, spans: &[Span]) -> String {
    let container = HIGHLIGHT_START.len() + HIGHLIGHT_END.len();
    let mut out = String::with_capacity(code.len() * 2 + container);
    out.push_str(HIGHLIGHT_START);

    let mut pos = 0;
    for span in spans {
        if span.start < pos {
            continue;
        }
        let (Some(before), Some(text)) = (code.get(pos..span.start), code.get(span.start..span.end))
        else {
            continue;
        };
        push_escaped(&mut out, before);
        out.push_str("<span class=\"");
        out.push_str(span.class);
        out.push_str("\">");
        push_escaped(&mut out, text);
        out.push_str("</span>");
        pos = span.end;
    }
    push_escaped(&mut out, code.get(pos..).unwrap_or(""));

    out.push_str(HIGHLIGHT_END);
    out
}
