//! Error types for doc-comment extraction.

/// Error while parsing a doc-comment XML blob.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DocCommentError {
    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// The blob contained no root element.
    #[error("doc comment XML has no root element")]
    MissingRoot,
}
