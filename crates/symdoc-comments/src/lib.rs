//! Doc-comment extraction for symdoc.
//!
//! The indexer attaches an XML blob to every documented symbol. This crate
//! turns those blobs into plain data, and provides the two rendering helpers
//! applied to the extracted text before it lands in the manifest:
//!
//! - [`DocComment::parse`]: XML blob → location, declaration text, abstract,
//!   discussion, return discussion, and parameter discussions
//! - [`render_markdown`]: markdown prose → HTML
//! - [`highlight`]: declaration snippet → language-tagged code block
//!
//! Extraction is a pure function of the blob. A malformed blob is an error;
//! only an entirely absent blob means "undocumented".
//!
//! # Example
//!
//! ```
//! use symdoc_comments::DocComment;
//!
//! let doc = DocComment::parse(
//!     "<Function line=\"7\" column=\"6\">\
//!      <Declaration>func play()</Declaration>\
//!      <Abstract><Para>Plays one song.</Para></Abstract>\
//!      </Function>",
//! )?;
//! assert_eq!(doc.line, 7);
//! assert_eq!(doc.summary, "Plays one song.");
//! # Ok::<(), symdoc_comments::DocCommentError>(())
//! ```

mod doc;
mod error;
mod highlight;
mod html;
mod markdown;
mod xml;

pub use doc::{DocComment, DocParameter};
pub use error::DocCommentError;
pub use highlight::highlight;
pub use html::escape_html;
pub use markdown::render_markdown;
pub use xml::XmlElement;
