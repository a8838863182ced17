//! `symdoc generate` command.
//!
//! Obtains the record stream, runs the core pipeline, and writes the
//! `docs.json` manifest consumed by downstream renderers. Module and
//! author metadata pass through the manifest untouched.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use symdoc_config::{CliSettings, Config};
use symdoc_core::DocNode;

use crate::error::CliError;
use crate::output::Output;

/// Manifest filename written into the output directory.
const MANIFEST_FILENAME: &str = "docs.json";

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to symdoc.toml (searched upward from the current directory when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Module name shown on every page.
    #[arg(long, value_name = "NAME")]
    module: Option<String>,

    /// Module version.
    #[arg(long, value_name = "VERSION")]
    module_version: Option<String>,

    /// Output directory for the manifest.
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Remove and recreate the output directory before writing.
    #[arg(long)]
    clean: bool,

    /// Comma-separated arguments passed through to xcodebuild.
    #[arg(long, value_name = "ARGS", value_delimiter = ',')]
    xcodebuild_arguments: Option<Vec<String>>,

    /// Author name shown in page footers.
    #[arg(long, value_name = "NAME")]
    author: Option<String>,

    /// Author homepage URL.
    #[arg(long, value_name = "URL")]
    author_url: Option<String>,

    /// GitHub project URL.
    #[arg(long, value_name = "URL")]
    github_url: Option<String>,

    /// Prefix for per-file GitHub source links.
    #[arg(long, value_name = "PREFIX")]
    github_file_prefix: Option<String>,

    /// Dash docset feed URL.
    #[arg(long, value_name = "URL")]
    dash_url: Option<String>,

    /// Absolute URL where the docs will be hosted.
    #[arg(long, value_name = "URL")]
    root_url: Option<String>,

    /// Read pre-captured indexer output instead of invoking the indexer.
    #[arg(long, value_name = "PATH")]
    sourcekitten_sourcefile: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(long)]
    pub(crate) verbose: bool,
}

/// The `docs.json` manifest handed to downstream renderers.
#[derive(Serialize)]
struct Manifest<'a> {
    module: &'a str,
    module_version: &'a str,
    author: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    author_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    github_file_prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dash_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root_url: Option<&'a str>,
    docset_platform: &'a str,
    coverage: u64,
    structure: Vec<DocNode>,
}

impl GenerateArgs {
    /// Run the generate command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let settings = self.cli_settings();
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        if config.indexer_resolved.sourcefile.is_none() {
            output.info("Running sourcekitten...");
        }
        let records = super::obtain_records(&config)?;
        let docs = symdoc_core::parse(&records)?;

        let dir = &config.output_resolved.dir;
        if config.output_resolved.clean && dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;

        let manifest = Manifest {
            module: &config.module.name,
            module_version: &config.module.version,
            author: &config.author.name,
            author_url: &config.author.url,
            github_url: config.links.github_url.as_deref(),
            github_file_prefix: config.links.github_file_prefix.as_deref(),
            dash_url: config.links.dash_url.as_deref(),
            root_url: config.output_resolved.root_url.as_deref(),
            docset_platform: &config.indexer_resolved.docset_platform,
            coverage: docs.coverage,
            structure: docs.export(),
        };
        let path = write_manifest(dir, &manifest)?;

        output.highlight(&format!("{}% documentation coverage", docs.coverage));
        output.success(&format!("Wrote manifest to {}", path.display()));
        Ok(())
    }

    /// Convert CLI flags into config overrides.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            module: self.module.clone(),
            module_version: self.module_version.clone(),
            output: self.output.clone(),
            clean: self.clean.then_some(true),
            root_url: self.root_url.clone(),
            author: self.author.clone(),
            author_url: self.author_url.clone(),
            github_url: self.github_url.clone(),
            github_file_prefix: self.github_file_prefix.clone(),
            dash_url: self.dash_url.clone(),
            xcodebuild_arguments: self.xcodebuild_arguments.clone(),
            sourcefile: self.sourcekitten_sourcefile.clone(),
        }
    }
}

/// Pretty-print the manifest into the output directory.
fn write_manifest(dir: &Path, manifest: &Manifest<'_>) -> Result<PathBuf, CliError> {
    let path = dir.join(MANIFEST_FILENAME);
    fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
