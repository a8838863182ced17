//! Error types for the build pipeline.

use symdoc_comments::DocCommentError;

/// Error while building the documentation tree.
///
/// Both variants abort the whole unit: there is no partial-tree recovery,
/// because a silently dropped symbol is a silent coverage gap.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A declaration-namespace kind UID with no registered category.
    #[error(
        "unsupported declaration kind `{uid}`; \
         please report this kind so it can be added to the classifier"
    )]
    UnsupportedKind {
        /// The UID as it appeared in the record.
        uid: String,
    },

    /// A doc-comment XML blob was present but unparsable.
    #[error("malformed doc comment for `{name}`: {source}")]
    MalformedDocComment {
        /// Name of the symbol carrying the blob.
        name: String,
        /// Underlying extraction error.
        #[source]
        source: DocCommentError,
    },
}
