//! Declaration tree construction from raw indexer records.
//!
//! Depth-first over the record stream, preserving source order. Each
//! sibling level owns a fresh [`SectionMark`] tracker: mark records update
//! it, declaration records carry its current value. Diagnostic-stage
//! wrapper records never become nodes; their substructure is spliced into
//! the surrounding output list transparently.

use symdoc_comments::{DocComment, highlight, render_markdown};
use symdoc_sourcekitten::RawRecord;

use crate::error::BuildError;
use crate::kind::{Kind, Resolved};
use crate::mark::SectionMark;
use crate::tree::{Declaration, DocTree, Parameter};

/// Summary stamped onto declarations with no doc comment.
pub const UNDOCUMENTED: &str = "Undocumented";

/// Language tag applied when highlighting declaration text.
const LANGUAGE: &str = "swift";

/// Build declarations from a record sequence into the arena.
///
/// Returns the ids of the nodes created for this sibling level, in source
/// order.
///
/// # Errors
///
/// Returns an error on a declaration-namespace kind with no registered
/// category, or on a doc-comment blob that fails to parse. Either aborts
/// the whole unit.
pub fn build_declarations(
    tree: &mut DocTree,
    records: &[RawRecord],
) -> Result<Vec<usize>, BuildError> {
    let mut mark = SectionMark::default();
    let mut out = Vec::new();

    for record in records {
        // Compiler-stage wrappers are structural noise: splice their
        // substructure into this level and move on.
        if record.diagnostic_stage.is_some() {
            out.extend(build_declarations(tree, &record.substructure)?);
            continue;
        }

        let Some(uid) = record.kind.as_deref() else {
            continue;
        };

        let kind = match Kind::resolve(uid) {
            Resolved::Known(kind) => kind,
            Resolved::Unknown {
                uid,
                declaration: true,
            } => return Err(BuildError::UnsupportedKind { uid }),
            Resolved::Unknown {
                declaration: false, ..
            } => continue,
        };

        if kind.is_mark() {
            if let Some(new_mark) = record.name.as_deref().and_then(SectionMark::from_comment) {
                mark = new_mark;
            }
            continue;
        }
        if !kind.is_declaration() {
            continue;
        }

        let mut declaration = Declaration::new(kind);
        declaration.file.clone_from(&record.filepath);
        declaration.usr = record.usr.clone().unwrap_or_default();
        declaration.name = record.name.clone().unwrap_or_default();
        declaration.mark = mark.clone();
        apply_doc(&mut declaration, record)?;

        // Children are independent of doc presence
        let children = build_declarations(tree, &record.substructure)?;
        out.push(tree.push(declaration, children));
    }

    Ok(out)
}

/// Populate documentation fields from the record's doc-comment blob.
///
/// An absent blob takes the undocumented defaults; a present-but-malformed
/// blob is a fatal error.
fn apply_doc(declaration: &mut Declaration, record: &RawRecord) -> Result<(), BuildError> {
    let Some(blob) = record.doc_xml.as_deref() else {
        declaration.summary = UNDOCUMENTED.to_owned();
        return Ok(());
    };

    let doc = DocComment::parse(blob).map_err(|source| BuildError::MalformedDocComment {
        name: declaration.name.clone(),
        source,
    })?;

    declaration.line = doc.line;
    declaration.column = doc.column;
    declaration.declaration = highlight(&doc.declaration, LANGUAGE);
    declaration.summary = doc.summary;
    declaration.discussion = doc.discussion;
    declaration.return_discussion = doc.return_discussion;
    declaration.parameters = doc
        .parameters
        .into_iter()
        .map(|parameter| Parameter {
            name: parameter.name,
            discussion: render_markdown(&parameter.discussion),
        })
        .collect();

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
