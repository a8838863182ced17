//! CLI command implementations.

mod coverage;
mod generate;

pub(crate) use coverage::CoverageArgs;
pub(crate) use generate::GenerateArgs;

use symdoc_config::Config;
use symdoc_sourcekitten::{DEFAULT_PROGRAM, RawRecord, load_output, parse_records, run_indexer};

use crate::error::CliError;

/// Obtain the raw record stream for the configured unit.
///
/// Reads the pre-captured sourcefile when configured, otherwise invokes
/// the indexer.
fn obtain_records(config: &Config) -> Result<Vec<RawRecord>, CliError> {
    let json = match &config.indexer_resolved.sourcefile {
        Some(path) => load_output(path)?,
        None => run_indexer(
            DEFAULT_PROGRAM,
            &config.indexer_resolved.xcodebuild_arguments,
        )?,
    };
    Ok(parse_records(&json)?)
}
