//! Error types for indexer invocation.

use std::path::PathBuf;

/// Error while obtaining or decoding indexer output.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IndexError {
    /// The indexer executable could not be spawned.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        /// Program name or path that was invoked.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The indexer exited with a non-zero status.
    #[error("`{program}` exited with {status}: {stderr}")]
    ToolFailed {
        /// Program name or path that was invoked.
        program: String,
        /// Exit status as reported by the OS.
        status: std::process::ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The indexer produced output that is not valid UTF-8.
    #[error("`{program}` produced non-UTF-8 output")]
    InvalidUtf8 {
        /// Program name or path that was invoked.
        program: String,
    },

    /// A pre-captured output file could not be read.
    #[error("failed to read indexer output from {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The output could not be decoded as a record stream.
    #[error("invalid indexer JSON")]
    Json(#[from] serde_json::Error),
}
