/// Escape HTML special characters.
///
/// Covers the five characters that are significant in both element content
/// and double- or single-quoted attribute values.
///
/// # Example
///
/// ```
/// use tabkit_html::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & \"Jerry\"</b>"), "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;");
/// ```
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
    use super::*;

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape_html("Profile"), "Profile");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_html("<b>X</b>"), "&lt;b&gt;X&lt;/b&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#x27;c&#x27;");
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_preserves_unicode() {
        assert_eq!(escape_html("Вкладка ✓"), "Вкладка ✓");
    }
}
