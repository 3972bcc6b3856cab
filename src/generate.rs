//! Generation run: discover inputs, validate headers, write the site
//!
//! ```text
//! <input>/<artifact>/<file>  →  headers (all, before any write)
//!                            →  Catalog
//!                            →  .nojekyll, stylesheet, index pages
//!                            →  one page per snapshot, on a bounded pool
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::{FailurePolicy, GeneratorConfig};
use crate::document::{highlight_sections, parse_sections, read_snapshot};
use crate::error::{Error, Result};
use crate::markdown::MarkdownRenderer;
use crate::model::{ArtifactSnapshot, Catalog, RenderJob};
use crate::render::{
    render_artifact_index, render_landing, render_page, PageData, NOJEKYLL_MARKER, STYLESHEET,
};
use crate::syntax::{Highlighter, LanguageRegistry};

/// One input file, as found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub artifact_name: String,
    pub path: PathBuf,
}

/// Summary of a successful run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub artifacts: usize,
    /// Every page written, in catalog order
    pub pages: Vec<PathBuf>,
}

/// List `<input>/<artifact>/<file>` entries.
///
/// Artifact directories and the files inside them are sorted by name; that
/// order breaks ties between snapshots with the same commit date. Hidden
/// entries are skipped, as are plain files at the top level and directories
/// below it.
pub fn discover_inputs(input_dir: &Path) -> Result<Vec<InputFile>> {
    if !input_dir.is_dir() {
        return Err(Error::MissingInputDir(input_dir.to_path_buf()));
    }

    let mut inputs = Vec::new();
    for artifact_dir in sorted_entries(input_dir, |p| p.is_dir())? {
        let Some(artifact_name) = artifact_dir.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!("Skipping non UTF-8 directory {}", artifact_dir.display());
            continue;
        };
        let artifact_name = artifact_name.to_string();

        for path in sorted_entries(&artifact_dir, |p| p.is_file())? {
            inputs.push(InputFile {
                artifact_name: artifact_name.clone(),
                path,
            });
        }
    }

    tracing::debug!("Discovered {} input files in {}", inputs.len(), input_dir.display());
    Ok(inputs)
}

fn sorted_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let read_error = |source| Error::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if keep(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Split results into values and failures, per the failure policy.
///
/// Under fail-fast the first failure (in input order) is returned; under
/// collect-all every failure is returned together.
pub fn settle<T>(results: Vec<Result<T>>, policy: FailurePolicy) -> Result<Vec<T>> {
    match policy {
        FailurePolicy::FailFast => results.into_iter().collect(),
        FailurePolicy::CollectAll => {
            let total = results.len();
            let mut values = Vec::with_capacity(total);
            let mut failures = Vec::new();
            for result in results {
                match result {
                    Ok(value) => values.push(value),
                    Err(e) => failures.push(e),
                }
            }
            if failures.is_empty() {
                Ok(values)
            } else {
                Err(Error::aggregate(failures, total))
            }
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Drives one generation run
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    registry: &'a LanguageRegistry,
    highlighter: &'a dyn Highlighter,
    markdown: &'a dyn MarkdownRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        highlighter: &'a dyn Highlighter,
        markdown: &'a dyn MarkdownRenderer,
    ) -> Self {
        Self {
            config,
            registry: LanguageRegistry::global(),
            highlighter,
            markdown,
        }
    }

    /// Run every stage. Nothing is written unless every header is valid.
    pub fn run(&self) -> Result<GenerationReport> {
        let inputs = discover_inputs(&self.config.input_dir)?;
        let snapshots = self.read_headers(&inputs)?;
        let catalog = Catalog::from_snapshots(snapshots);
        tracing::info!(
            "Found {} snapshots of {} artifacts",
            catalog.snapshot_count(),
            catalog.artifact_count()
        );
        if catalog.is_empty() {
            tracing::warn!(
                "No snapshots found in {}, writing an empty site",
                self.config.input_dir.display()
            );
        }

        self.write_site_files(&catalog)?;
        let pages = self.render_pages(&catalog)?;

        Ok(GenerationReport {
            artifacts: catalog.artifact_count(),
            pages,
        })
    }

    /// Parse the header of every input file
    pub fn read_headers(&self, inputs: &[InputFile]) -> Result<Vec<ArtifactSnapshot>> {
        match self.config.failure_policy {
            FailurePolicy::FailFast => inputs
                .iter()
                .map(|input| read_snapshot(&input.artifact_name, &input.path, self.registry))
                .collect(),
            policy => {
                let results = inputs
                    .iter()
                    .map(|input| read_snapshot(&input.artifact_name, &input.path, self.registry))
                    .collect();
                settle(results, policy)
            }
        }
    }

    /// Write the marker, stylesheet, landing page and every artifact index
    pub fn write_site_files(&self, catalog: &Catalog) -> Result<()> {
        let out = &self.config.output_dir;
        fs::create_dir_all(out).map_err(|source| Error::Write {
            path: out.clone(),
            source,
        })?;

        if self.config.nojekyll {
            write_file(&out.join(NOJEKYLL_MARKER), b"")?;
        }
        write_file(&out.join(&self.config.stylesheet), STYLESHEET.as_bytes())?;
        write_file(
            &out.join("index.html"),
            render_landing(catalog, &self.config.stylesheet).as_bytes(),
        )?;

        for group in catalog.groups() {
            let index = out.join(group.name()).join("index.html");
            write_file(
                &index,
                render_artifact_index(group, &self.config.stylesheet).as_bytes(),
            )?;
            tracing::debug!("Wrote {}", index.display());
        }
        Ok(())
    }

    /// Render every snapshot's page on a bounded worker pool
    pub fn render_pages(&self, catalog: &Catalog) -> Result<Vec<PathBuf>> {
        let jobs = catalog.jobs();
        let workers = self.config.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("lazylit-{i}"))
            .build()?;
        tracing::debug!("Rendering {} pages on {} workers", jobs.len(), workers);

        pool.install(|| match self.config.failure_policy {
            // Short-circuits: once a job fails, jobs not yet started are skipped
            FailurePolicy::FailFast => jobs
                .par_iter()
                .map(|job| self.render_snapshot(job))
                .collect(),
            policy => {
                let results = jobs
                    .par_iter()
                    .map(|job| self.render_snapshot(job))
                    .collect();
                settle(results, policy)
            }
        })
    }

    /// Read, section, highlight and write one snapshot's page
    pub fn render_snapshot(&self, job: &RenderJob<'_>) -> Result<PathBuf> {
        let snapshot = job.snapshot;
        let source = &snapshot.doc_file;
        let language = self
            .registry
            .from_path(source)
            .ok_or_else(|| Error::UnsupportedLanguage {
                path: source.clone(),
            })?;
        let contents = fs::read_to_string(source).map_err(|e| Error::Read {
            path: source.clone(),
            source: e,
        })?;

        let mut sections = parse_sections(&contents, snapshot.first_code_line, language);
        let dividers = highlight_sections(&mut sections, language, self.highlighter, self.markdown)
            .map_err(|e| Error::Highlight {
                path: source.clone(),
                source: e,
            })?;
        let expected = sections.len().saturating_sub(1);
        if dividers < expected {
            tracing::warn!(
                "{}: found {} of {} section dividers after highlighting",
                source.display(),
                dividers,
                expected
            );
        }

        let html = render_page(&PageData {
            snapshot,
            other_revisions: &job.other_revisions,
            sections: &sections,
            stylesheet: &self.config.stylesheet,
        });
        let destination = snapshot.destination(&self.config.output_dir);
        write_file(&destination, html.as_bytes())?;

        tracing::info!("{} -> {}", source.display(), destination.display());
        Ok(destination)
    }
}
