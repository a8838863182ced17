//! HTML escaping shared by the rendering helpers.

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<T> & "quoted" 'single'"#),
            "&lt;T&gt; &amp; &quot;quoted&quot; &#x27;single&#x27;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("func perform(song: Song)"), "func perform(song: Song)");
    }
}
