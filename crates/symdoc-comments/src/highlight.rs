//! Syntax highlighting for declaration snippets.
//!
//! Declarations are emitted as language-tagged code blocks; the actual
//! token coloring happens client-side, so the job here is producing the
//! standard `<pre><code class="language-…">` shape with escaped content.

use std::fmt::Write;

use crate::html::escape_html;

/// Wrap a declaration in a highlighted code block.
#[must_use]
pub fn highlight(code: &str, language: &str) -> String {
    let mut out = String::with_capacity(code.len() + 48);
    write!(
        out,
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        escape_html(language),
        escape_html(code)
    )
    .unwrap();
    out
}
