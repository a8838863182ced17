//! Grouping of top-level declarations into overview pages.
//!
//! Runs once, after building: for each kind in priority order, the matching
//! top-level nodes are moved under one synthetic overview node appended to
//! the end of the list. Nested children are never re-grouped.

use crate::kind::Kind;
use crate::tree::{Declaration, DocTree};

/// Bucket same-kind top-level nodes under synthetic overview nodes.
///
/// Walks [`Kind::all_declarations`] front to back; a kind with no matches
/// leaves the list unchanged. Relative order is preserved both for the
/// unmatched remainder and within each overview's children.
pub fn group_declarations(tree: &mut DocTree) {
    for &kind in Kind::all_declarations() {
        let (matched, remaining): (Vec<usize>, Vec<usize>) = tree
            .top_level()
            .iter()
            .partition(|&&id| tree.node(id).kind == kind);
        if matched.is_empty() {
            continue;
        }

        let overview = overview_node(kind);
        let overview_id = tree.push(overview, matched);

        let mut top_level = remaining;
        top_level.push(overview_id);
        tree.set_top_level(top_level);
    }
}

/// Synthetic container node for one kind's overview page.
fn overview_node(kind: Kind) -> Declaration {
    let plural = kind.plural_label();
    let mut node = Declaration::new(Kind::Overview);
    node.name = plural.to_owned();
    node.summary = format!(
        "The following {} are available globally.",
        plural.to_lowercase()
    );
    node
}

// ============================================================================
// Tests
// ============================================================================
