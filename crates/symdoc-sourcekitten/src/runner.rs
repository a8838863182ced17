//! Synchronous indexer invocation.
//!
//! The indexer is treated as an opaque black box: one `sourcekitten doc`
//! call either returns complete JSON on stdout or the pipeline does not
//! proceed. No retries, no negotiation. A pre-captured output file can stand
//! in for the live invocation.

use std::path::Path;
use std::process::Command;

use crate::error::IndexError;
use crate::record::RawRecord;

/// Default indexer executable name, resolved via `PATH`.
pub const DEFAULT_PROGRAM: &str = "sourcekitten";

/// Run the indexer and return its stdout.
///
/// Invokes `<program> doc [-- <xcodebuild args…>]` and waits for completion.
///
/// # Errors
///
/// Returns an error if the program cannot be spawned, exits with a non-zero
/// status (stderr is captured into the error), or emits non-UTF-8 output.
pub fn run_indexer(program: &str, xcodebuild_arguments: &[String]) -> Result<String, IndexError> {
    let mut command = Command::new(program);
    command.arg("doc");
    if !xcodebuild_arguments.is_empty() {
        command.arg("--").args(xcodebuild_arguments);
    }

    tracing::debug!(program, args = ?xcodebuild_arguments, "running indexer");

    let output = command.output().map_err(|source| IndexError::Spawn {
        program: program.to_owned(),
        source,
    })?;

    if !output.status.success() {
        return Err(IndexError::ToolFailed {
            program: program.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| IndexError::InvalidUtf8 {
        program: program.to_owned(),
    })
}

/// Read pre-captured indexer output from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_output(path: &Path) -> Result<String, IndexError> {
    std::fs::read_to_string(path).map_err(|source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode indexer output into a record stream.
///
/// # Errors
///
/// Returns an error if the output is not a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>, IndexError> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_run_indexer_captures_stdout() {
        // `true` ignores its arguments and exits 0 with empty output
        let stdout = run_indexer("true", &[]).unwrap();
        assert_eq!(stdout, "");
    }

    #[test]
    fn test_run_indexer_nonzero_exit_is_an_error() {
        let err = run_indexer("false", &[]).unwrap_err();
        match err {
            IndexError::ToolFailed { program, status, .. } => {
                assert_eq!(program, "false");
                assert!(!status.success());
            }
            other => panic!("expected ToolFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_indexer_missing_program_is_an_error() {
        let err = run_indexer("symdoc-test-no-such-indexer", &[]).unwrap_err();
        assert!(matches!(err, IndexError::Spawn { .. }));
    }

    #[test]
    fn test_load_output_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(load_output(&path).unwrap(), "[]");
    }

    #[test]
    fn test_load_output_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_output(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IndexError::Read { .. }));
    }

    #[test]
    fn test_parse_records_decodes_array() {
        let records =
            parse_records(r#"[{"key.kind": "source.lang.swift.decl.class"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].kind.as_deref(),
            Some("source.lang.swift.decl.class")
        );
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"key.kind": "x"}"#),
            Err(IndexError::Json(_))
        ));
    }
}
