//! SourceKitten integration for symdoc.
//!
//! Provides the typed model of the indexer's JSON record stream and the
//! synchronous invocation that produces it:
//!
//! - [`RawRecord`]: one `key.`-prefixed record, with nested substructure
//! - [`run_indexer`]: spawn `sourcekitten doc`, all-or-nothing
//! - [`load_output`]: read a pre-captured output file instead
//! - [`parse_records`]: decode output into a record stream

mod error;
mod record;
mod runner;

pub use error::IndexError;
pub use record::RawRecord;
pub use runner::{DEFAULT_PROGRAM, load_output, parse_records, run_indexer};
