use anyhow::{Context, Result};
use clap::Parser;

use lazylit::cli::CliArgs;
use lazylit::markdown::CommonMarkRenderer;
use lazylit::syntax::TreeSitterHighlighter;
use lazylit::{Generator, GeneratorConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    lazylit::tracing::init();

    let config = match &args.config {
        Some(path) => GeneratorConfig::load_from(path)?,
        None => GeneratorConfig::discover(),
    };
    let config = args.apply(config);

    let highlighter =
        TreeSitterHighlighter::new().context("Failed to load syntax highlighting grammars")?;
    let markdown = CommonMarkRenderer::new();

    let report = Generator::new(&config, &highlighter, &markdown).run()?;
    tracing::info!(
        "Wrote {} pages for {} artifacts to {}",
        report.pages.len(),
        report.artifacts,
        config.output_dir.display()
    );
    Ok(())
}
