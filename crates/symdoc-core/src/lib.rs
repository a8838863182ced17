//! Core documentation pipeline for symdoc.
//!
//! Turns the raw indexer record stream into a documentation tree plus a
//! coverage percentage, in four passes:
//!
//! 1. [`build_declarations`]: records → arena of typed nodes
//! 2. [`group_declarations`]: top-level nodes bucketed into overview pages
//! 3. [`assign_urls`]: page path or parent-page anchor for every node
//! 4. [`doc_coverage`]: integer percentage over the raw record counts
//!
//! [`parse`] runs all four for one unit; [`parse_units`] maps it over
//! independent units in parallel. The result is exported as a nested
//! serializable tree ([`DocNode`]) for the manifest.

mod builder;
mod coverage;
mod error;
mod group;
mod kind;
mod mark;
mod tree;
mod url;

use rayon::prelude::*;
use serde::Serialize;
use symdoc_sourcekitten::RawRecord;

pub use builder::{UNDOCUMENTED, build_declarations};
pub use coverage::doc_coverage;
pub use error::BuildError;
pub use group::group_declarations;
pub use kind::{Kind, Resolved};
pub use mark::SectionMark;
pub use tree::{Declaration, DocTree, Parameter};
pub use url::assign_urls;

/// Parsed documentation for one indexing unit.
#[derive(Debug)]
pub struct ModuleDocs {
    /// Arena holding the final tree, top level in grouped order.
    pub tree: DocTree,
    /// Integer documentation-coverage percentage.
    pub coverage: u64,
}

impl ModuleDocs {
    /// Export the tree as nested serializable nodes, top level first.
    #[must_use]
    pub fn export(&self) -> Vec<DocNode> {
        self.tree
            .top_level()
            .iter()
            .map(|&id| export_node(&self.tree, id))
            .collect()
    }
}

/// One exported node: declaration fields flattened, children nested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocNode {
    /// Node fields, serialized inline.
    #[serde(flatten)]
    pub declaration: Declaration,
    /// Nested children, omitted from JSON when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocNode>,
}

fn export_node(tree: &DocTree, id: usize) -> DocNode {
    DocNode {
        declaration: tree.node(id).clone(),
        children: tree
            .children(id)
            .iter()
            .map(|&child| export_node(tree, child))
            .collect(),
    }
}

/// Parse one unit's record stream into a documentation tree and coverage.
///
/// Runs build, group, and URL passes in order, then aggregates coverage
/// from the raw records.
///
/// # Errors
///
/// Returns an error on an unsupported declaration kind or a malformed
/// doc-comment blob; no partial tree is returned.
pub fn parse(records: &[RawRecord]) -> Result<ModuleDocs, BuildError> {
    let mut tree = DocTree::new();
    let top_level = build_declarations(&mut tree, records)?;
    tree.set_top_level(top_level);
    group_declarations(&mut tree);
    assign_urls(&mut tree);

    Ok(ModuleDocs {
        tree,
        coverage: doc_coverage(records),
    })
}

/// Parse several independent units in parallel.
///
/// Each unit gets its own arena and marker state; the first error aborts
/// the whole batch.
///
/// # Errors
///
/// Returns the first unit's error, as [`parse`] would.
pub fn parse_units(units: &[Vec<RawRecord>]) -> Result<Vec<ModuleDocs>, BuildError> {
    units.par_iter().map(|records| parse(records)).collect()
}

// ============================================================================
// Tests
// ============================================================================
