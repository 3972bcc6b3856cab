//! Command-line argument parsing
//!
//! Every flag is optional and overrides the matching config field.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{FailurePolicy, GeneratorConfig};

/// Generate cross-linked HTML notes from annotated source snapshots
#[derive(Parser, Debug, Default)]
#[command(
    name = "lazylit",
    version,
    about = "Generate cross-linked HTML notes from annotated source snapshots",
    long_about = "Generate cross-linked HTML notes from annotated source snapshots.\n\n\
        Input is read from <input>/<artifact>/<file>, where every file begins with a\n\
        comment header (Commit, CommitDate, SourceFile, SourceLink, DocAuthor).\n\
        Output goes to <output>/<artifact>/<file>.html, with an index page per\n\
        artifact and a landing page listing every artifact."
)]
pub struct CliArgs {
    /// Config file to use instead of ./lazylit.yaml or the per-user config
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding one subdirectory per artifact
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory to write the generated site into
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of worker threads
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Keep going after a failure and report every failure at the end
    #[arg(short = 'k', long)]
    pub keep_going: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(input) = self.input {
            config.input_dir = input;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if self.jobs.is_some() {
            config.jobs = self.jobs;
        }
        if self.keep_going {
            config.failure_policy = FailurePolicy::CollectAll;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let config = GeneratorConfig {
            output_dir: PathBuf::from("site"),
            jobs: Some(2),
            ..Default::default()
        };
        assert_eq!(CliArgs::default().apply(config.clone()), config);
    }

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs {
            config: None,
            input: Some(PathBuf::from("in")),
            output: Some(PathBuf::from("out")),
            jobs: Some(8),
            keep_going: true,
        };
        let config = args.apply(GeneratorConfig::default());
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.jobs, Some(8));
        assert_eq!(config.failure_policy, FailurePolicy::CollectAll);
    }

    #[test]
    fn test_parse_from_argv() {
        let args = CliArgs::parse_from(["lazylit", "-o", "public", "--keep-going"]);
        assert_eq!(args.output, Some(PathBuf::from("public")));
        assert!(args.keep_going);
        assert!(args.input.is_none());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
