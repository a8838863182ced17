//! Extraction of documentation fields from indexer doc-comment XML.
//!
//! The indexer attaches one XML blob per documented symbol, rooted at an
//! element named after the symbol kind and carrying `line`/`column`
//! attributes, e.g.:
//!
//! ```xml
//! <Function file="Musician.swift" line="7" column="6">
//!   <Name>perform(_:)</Name>
//!   <USR>s:9Musicians7performyyF</USR>
//!   <Declaration>func perform(_ song: Song)</Declaration>
//!   <Abstract><Para>Performs the requested song.</Para></Abstract>
//!   <Parameters><Parameter><Name>song</Name>
//!     <Discussion><Para>The song to play.</Para></Discussion>
//!   </Parameter></Parameters>
//! </Function>
//! ```
//!
//! Extraction is a pure function of the blob: prose fields are the deep text
//! content of the matching direct-child elements, and missing or unparsable
//! location attributes read as zero.

use crate::error::DocCommentError;
use crate::xml::{self, XmlElement};

/// One documented parameter: name plus raw discussion text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParameter {
    /// Parameter name.
    pub name: String,
    /// Raw discussion text (markdown rendering happens downstream).
    pub discussion: String,
}

/// Fields extracted from one doc-comment XML blob.
///
/// All prose fields are raw text; syntax highlighting and markdown rendering
/// are applied by the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Source line of the documented symbol (0 when absent).
    pub line: u32,
    /// Source column of the documented symbol (0 when absent).
    pub column: u32,
    /// Declaration text, e.g. `func perform(_ song: Song)`.
    pub declaration: String,
    /// One-line abstract.
    pub summary: String,
    /// Long-form discussion.
    pub discussion: String,
    /// Return-value discussion.
    pub return_discussion: String,
    /// Documented parameters, in declaration order.
    pub parameters: Vec<DocParameter>,
}

impl DocComment {
    /// Parse a doc-comment XML blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob is not well-formed XML. Absence of any
    /// individual field is not an error; the field is left empty (or zero).
    pub fn parse(blob: &str) -> Result<Self, DocCommentError> {
        let root = xml::parse(blob)?;
        Ok(Self {
            line: u32_attr(&root, "line"),
            column: u32_attr(&root, "column"),
            declaration: child_text(&root, "Declaration"),
            summary: child_text(&root, "Abstract"),
            discussion: child_text(&root, "Discussion"),
            return_discussion: child_text(&root, "ResultDiscussion"),
            parameters: parse_parameters(&root),
        })
    }
}

/// Numeric attribute value, 0 when missing or unparsable.
fn u32_attr(el: &XmlElement, name: &str) -> u32 {
    el.attr(name).and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Concatenated deep text of all direct children with the given tag.
fn child_text(el: &XmlElement, tag: &str) -> String {
    el.children_named(tag).map(XmlElement::text_content).collect()
}

/// `Parameters/Parameter` entries in document order.
fn parse_parameters(root: &XmlElement) -> Vec<DocParameter> {
    root.children_named("Parameters")
        .flat_map(|params| params.children_named("Parameter"))
        .map(|param| DocParameter {
            name: child_text(param, "Name"),
            discussion: child_text(param, "Discussion"),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
