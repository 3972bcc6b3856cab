//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use lazylit::document::wrap_container;
use lazylit::syntax::{HighlightError, Highlighter, Language, LanguageRegistry};
use lazylit::GeneratorConfig;

/// Highlighter that returns its input unchanged inside the container.
///
/// Dividers come back in their bare form, so recombined fragments must equal
/// the original code blocks byte for byte.
pub struct Passthrough;

impl Highlighter for Passthrough {
    fn highlight(&self, _language: &Language, code: &str) -> Result<String, HighlightError> {
        Ok(wrap_container(code))
    }
}

/// Highlighter that always fails
pub struct Broken;

impl Highlighter for Broken {
    fn highlight(&self, language: &Language, _code: &str) -> Result<String, HighlightError> {
        Err(HighlightError::Parse {
            language: language.name().to_string(),
        })
    }
}

pub fn python() -> &'static Language {
    LanguageRegistry::global().by_name("python").unwrap()
}

pub fn go() -> &'static Language {
    LanguageRegistry::global().by_name("go").unwrap()
}

/// Header block builder for a given comment symbol
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    symbol: String,
    fields: Vec<(String, String)>,
}

impl HeaderBuilder {
    /// A complete, valid header
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            fields: vec![
                ("Commit".into(), "9c1e2f0".into()),
                ("CommitDate".into(), "Jul 2 2020".into()),
                ("SourceFile".into(), "lisp.py".into()),
                ("SourceLink".into(), "https://example.com/lisp.py".into()),
                ("DocAuthor".into(), "Ada".into()),
            ],
        }
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(field) => field.1 = value.to_string(),
            None => self.fields.push((key.to_string(), value.to_string())),
        }
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.retain(|(k, _)| k != key);
        self
    }

    pub fn build(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{} {}: {}\n", self.symbol, k, v))
            .collect()
    }
}

/// Python body with three documentation/code alternations
pub const PYTHON_BODY: &str = "\
# Read a token.
def read(tokens):
    return tokens.pop(0)

# Evaluate `x`.
def evaluate(x):
    return x

# Entry point.
print(evaluate(read([1])))
";

/// Input tree under a temp dir plus an output dir beside it
pub struct Site {
    pub dir: tempfile::TempDir,
}

impl Site {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn input(&self) -> PathBuf {
        self.dir.path().join("artifacts")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("docs")
    }

    /// Write `<input>/<artifact>/<file>`
    pub fn add(&self, artifact: &str, file: &str, contents: &str) -> PathBuf {
        let path = self.input().join(artifact).join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            input_dir: self.input(),
            output_dir: self.output(),
            jobs: Some(2),
            ..Default::default()
        }
    }

    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output().join(relative)).unwrap()
    }
}

/// Every file below `root`, relative to it, sorted
pub fn list_files(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = Vec::new();
    if root.exists() {
        walk(root, root, &mut out);
    }
    out.sort();
    out
}
