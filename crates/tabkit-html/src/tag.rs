//! Element builders.

use crate::attributes::Attributes;

/// Render an element with the given inner markup and attributes.
///
/// `content` is inserted verbatim; escape text with
/// [`escape_html`](crate::escape_html) before passing it in.
///
/// # Example
///
/// ```
/// use tabkit_html::{Attributes, tag};
///
/// let attrs = Attributes::new().with("class", "tab-content");
/// assert_eq!(tag("div", "<p>Hi</p>", &attrs), r#"<div class="tab-content"><p>Hi</p></div>"#);
/// ```
#[must_use]
pub fn tag(name: &str, content: &str, attrs: &Attributes) -> String {
    let rendered = attrs.render();
    let mut out = String::with_capacity(name.len() * 2 + rendered.len() + content.len() + 5);
    out.push('<');
    out.push_str(name);
    out.push_str(&rendered);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
}

/// Render an anchor element pointing at `href`.
///
/// `href` overrides any `href` already present in `attrs`.
#[must_use]
pub fn link(text: &str, href: &str, mut attrs: Attributes) -> String {
    attrs.insert("href", href);
    tag("a", text, &attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_without_attributes() {
        assert_eq!(tag("li", "x", &Attributes::new()), "<li>x</li>");
    }

    #[test]
    fn test_tag_with_empty_content() {
        let attrs = Attributes::new().with("class", "tab-content");
        assert_eq!(tag("div", "", &attrs), r#"<div class="tab-content"></div>"#);
    }

    #[test]
    fn test_link_href_after_class() {
        let attrs = Attributes::new()
            .with("class", "dropdown-toggle")
            .with("data-toggle", "dropdown");
        assert_eq!(
            link("Menu", "#", attrs),
            r##"<a class="dropdown-toggle" href="#" data-toggle="dropdown">Menu</a>"##
        );
    }

    #[test]
    fn test_link_overrides_href() {
        let attrs = Attributes::new().with("href", "/old");
        assert_eq!(link("New", "/new", attrs), r#"<a href="/new">New</a>"#);
    }

    #[test]
    fn test_link_text_is_not_escaped() {
        assert_eq!(
            link("<b>X</b>", "#a", Attributes::new()),
            r##"<a href="#a"><b>X</b></a>"##
        );
    }
}
