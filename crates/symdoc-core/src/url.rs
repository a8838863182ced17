//! URL assignment over the final tree.
//!
//! A node with children gets its own page; a childless node gets an anchor
//! on its parent's page keyed by the node's USR. URLs depend only on
//! ancestry, so any traversal order works; this one is depth-first in
//! sibling order and visits every node exactly once.

use crate::tree::DocTree;

/// Assign a URL to every node reachable from the top level.
pub fn assign_urls(tree: &mut DocTree) {
    let mut parents: Vec<String> = Vec::new();
    for id in tree.top_level().to_vec() {
        assign(tree, id, &mut parents);
    }
}

fn assign(tree: &mut DocTree, id: usize, parents: &mut Vec<String>) {
    if tree.children(id).is_empty() {
        let node = tree.node(id);
        if node.usr.is_empty() {
            tracing::warn!(name = %node.name, "leaf declaration has no USR, anchor will be empty");
        }
        let url = format!("{}.html#/{}", parents.join("/"), node.usr);
        tree.node_mut(id).url = url;
        return;
    }

    let name = tree.node(id).name.clone();
    tree.node_mut(id).url = if parents.is_empty() {
        format!("{name}.html")
    } else {
        format!("{}/{name}.html", parents.join("/"))
    };

    parents.push(name);
    for child in tree.children(id).to_vec() {
        assign(tree, child, parents);
    }
    parents.pop();
}

// ============================================================================
// Tests
// ============================================================================
