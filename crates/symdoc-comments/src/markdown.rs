//! Markdown rendering for extracted documentation prose.
//!
//! Parameter discussions (and nothing else) pass through markdown before
//! landing in the manifest. The writer covers the block and inline elements
//! that occur in doc comments; unsupported constructs degrade to their plain
//! text.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::highlight::highlight;
use crate::html::escape_html;

/// Render markdown prose to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut writer = HtmlWriter::default();
    for event in Parser::new_ext(markdown, options) {
        writer.event(event);
    }
    writer.output
}

/// Minimal HTML writer over pulldown-cmark events.
#[derive(Default)]
struct HtmlWriter {
    output: String,
    /// Language and accumulated content of the open code block, if any.
    code: Option<(Option<String>, String)>,
    in_table_head: bool,
}

impl HtmlWriter {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(&tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if let Some((_, content)) = self.code.as_mut() {
                    content.push_str(&text);
                } else {
                    self.output.push_str(&escape_html(&text));
                }
            }
            Event::Code(code) => {
                write!(self.output, "<code>{}</code>", escape_html(&code)).unwrap();
            }
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.output.push('\n'),
            Event::HardBreak => self.output.push_str("<br />"),
            Event::Rule => self.output.push_str("<hr />"),
            Event::TaskListMarker(checked) => {
                self.output.push_str(if checked {
                    r#"<input type="checkbox" disabled checked />"#
                } else {
                    r#"<input type="checkbox" disabled />"#
                });
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                write!(self.output, "<h{}>", *level as u8).unwrap();
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => {
                        Some(info.split_whitespace().next().unwrap_or_default().to_owned())
                    }
                    _ => None,
                };
                self.code = Some((lang, String::new()));
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(_) => self.output.push_str("<table>"),
            Tag::TableHead => {
                self.in_table_head = true;
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => self.output.push_str("<tr>"),
            Tag::TableCell => {
                self.output
                    .push_str(if self.in_table_head { "<th>" } else { "<td>" });
            }
            Tag::Emphasis => self.output.push_str("<em>"),
            Tag::Strong => self.output.push_str("<strong>"),
            Tag::Strikethrough => self.output.push_str("<s>"),
            Tag::Link { dest_url, .. } => {
                write!(self.output, r#"<a href="{}">"#, escape_html(dest_url)).unwrap();
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(level) => {
                write!(self.output, "</h{}>", level as u8).unwrap();
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => {
                if let Some((lang, content)) = self.code.take() {
                    match lang {
                        Some(lang) => self.output.push_str(&highlight(&content, &lang)),
                        None => {
                            write!(self.output, "<pre><code>{}</code></pre>", escape_html(&content))
                                .unwrap();
                        }
                    }
                }
            }
            TagEnd::List(ordered) => {
                self.output.push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.output.push_str("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output
                    .push_str(if self.in_table_head { "</th>" } else { "</td>" });
            }
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Strikethrough => self.output.push_str("</s>"),
            TagEnd::Link => self.output.push_str("</a>"),
            _ => {}
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_paragraph_with_inline_code() {
        assert_eq!(
            render_markdown("the `song` to perform"),
            "<p>the <code>song</code> to perform</p>"
        );
    }

    #[test]
    fn test_render_emphasis_and_strong() {
        assert_eq!(
            render_markdown("a *quiet* and **loud** mix"),
            "<p>a <em>quiet</em> and <strong>loud</strong> mix</p>"
        );
    }

    #[test]
    fn test_render_link() {
        assert_eq!(
            render_markdown("see [the docs](https://example.com/docs)"),
            "<p>see <a href=\"https://example.com/docs\">the docs</a></p>"
        );
    }

    #[test]
    fn test_render_unordered_list() {
        assert_eq!(
            render_markdown("- one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_render_fenced_code_block() {
        assert_eq!(
            render_markdown("```swift\nlet x = 1\n```"),
            "<pre><code class=\"language-swift\">let x = 1\n</code></pre>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(
            render_markdown("use a < b & c"),
            "<p>use a &lt; b &amp; c</p>"
        );
    }

    #[test]
    fn test_strikethrough_extension_enabled() {
        assert_eq!(
            render_markdown("~~deprecated~~ name"),
            "<p><s>deprecated</s> name</p>"
        );
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
