//! Arena storage for the documentation tree.
//!
//! Nodes are stored in a flat `Vec<Declaration>` with child relationships
//! tracked as index lists, plus an ordered index list for the current top
//! level. The grouping pass re-parents nodes by moving indices between
//! lists, so node ownership stays single and acyclic throughout the
//! pipeline.

use std::path::PathBuf;

use serde::Serialize;

use crate::kind::Kind;
use crate::mark::SectionMark;

/// One documented parameter: name plus rendered discussion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Discussion, already rendered through markdown.
    pub discussion: String,
}

/// One node of the documentation tree.
///
/// Created by the builder, re-parented by the grouper, given its `url` by
/// the URL assigner, then exported read-only. Children live in the arena
/// (see [`DocTree`]), not inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Semantic category of the node.
    pub kind: Kind,
    /// Source file the symbol was parsed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Source line (0 when the symbol is undocumented).
    pub line: u32,
    /// Source column (0 when the symbol is undocumented).
    pub column: u32,
    /// Stable unique symbol identifier, the anchor key for leaf URLs.
    pub usr: String,
    /// Display name; overview nodes use the kind's plural label.
    pub name: String,
    /// Syntax-highlighted declaration text.
    pub declaration: String,
    /// One-line abstract, `"Undocumented"` when no doc comment exists.
    pub summary: String,
    /// Long-form discussion.
    pub discussion: String,
    /// Return-value discussion.
    pub return_discussion: String,
    /// Documented parameters in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Page path or anchor, assigned once by the URL pass.
    pub url: String,
    /// Section marker in effect when the node was created.
    #[serde(skip_serializing_if = "SectionMark::is_empty")]
    pub mark: SectionMark,
}

impl Declaration {
    /// Create an empty declaration of the given kind.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            file: None,
            line: 0,
            column: 0,
            usr: String::new(),
            name: String::new(),
            declaration: String::new(),
            summary: String::new(),
            discussion: String::new(),
            return_discussion: String::new(),
            parameters: Vec::new(),
            url: String::new(),
            mark: SectionMark::default(),
        }
    }
}

/// Documentation tree arena.
///
/// Push returns the node's id; ids are stable for the lifetime of the tree.
/// The top level is an ordered id list that the grouping pass rewrites.
#[derive(Debug, Default)]
pub struct DocTree {
    nodes: Vec<Declaration>,
    children: Vec<Vec<usize>>,
    top_level: Vec<usize>,
}

impl DocTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given children, returning its id.
    pub fn push(&mut self, declaration: Declaration, children: Vec<usize>) -> usize {
        debug_assert!(children.iter().all(|&id| id < self.nodes.len()));
        let id = self.nodes.len();
        self.nodes.push(declaration);
        self.children.push(children);
        id
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: usize) -> &Declaration {
        &self.nodes[id]
    }

    /// Mutable node by id.
    pub fn node_mut(&mut self, id: usize) -> &mut Declaration {
        &mut self.nodes[id]
    }

    /// Child ids of a node, in source order.
    #[must_use]
    pub fn children(&self, id: usize) -> &[usize] {
        &self.children[id]
    }

    /// Current top-level ids, in order.
    #[must_use]
    pub fn top_level(&self) -> &[usize] {
        &self.top_level
    }

    /// Replace the top-level id list.
    pub fn set_top_level(&mut self, ids: Vec<usize>) {
        self.top_level = ids;
    }

    /// Total number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
