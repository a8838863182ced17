//! `symdoc coverage` command.

use std::path::PathBuf;

use clap::Args;
use symdoc_config::{CliSettings, Config};
use symdoc_core::doc_coverage;

use crate::error::CliError;

/// Arguments for the coverage command.
#[derive(Args)]
pub(crate) struct CoverageArgs {
    /// Path to symdoc.toml (searched upward from the current directory when omitted).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Comma-separated arguments passed through to xcodebuild.
    #[arg(long, value_name = "ARGS", value_delimiter = ',')]
    xcodebuild_arguments: Option<Vec<String>>,

    /// Read pre-captured indexer output instead of invoking the indexer.
    #[arg(long, value_name = "PATH")]
    sourcekitten_sourcefile: Option<PathBuf>,
}

impl CoverageArgs {
    /// Run the coverage command.
    ///
    /// Prints only the integer percentage, on stdout, for scripting.
    #[allow(clippy::print_stdout)]
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            xcodebuild_arguments: self.xcodebuild_arguments.clone(),
            sourcefile: self.sourcekitten_sourcefile.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let records = super::obtain_records(&config)?;
        println!("{}", doc_coverage(&records));
        Ok(())
    }
}
