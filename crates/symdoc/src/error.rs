//! CLI error types.

use symdoc_config::ConfigError;
use symdoc_core::BuildError;
use symdoc_sourcekitten::IndexError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
