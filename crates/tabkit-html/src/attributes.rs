//! Ordered HTML attribute maps.

use std::fmt::{self, Write};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::escape::escape_html;

/// Attributes rendered ahead of all others, in this order.
///
/// Everything else follows in insertion order, which keeps generated markup
/// stable for snapshot comparisons.
const LEADING_ATTRIBUTES: &[&str] = &[
    "type", "id", "class", "name", "value", "href", "src", "action", "method", "selected",
    "checked", "readonly", "disabled", "multiple", "size", "maxlength", "width", "height",
    "rows", "cols", "alt", "title", "rel", "media",
];

/// A single attribute value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute: `true` renders the bare name, `false` omits it.
    Flag(bool),
    /// Integer value, rendered with `to_string`.
    Integer(i64),
    /// Text value, escaped on render.
    Text(String),
}

impl AttrValue {
    /// Text content of the value, if it is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an element id.
    ///
    /// Text and integers are used as written; a flag is not an id, so
    /// callers fall back to a generated one.
    #[must_use]
    pub fn as_id(&self) -> Option<String> {
        match self {
            Self::Flag(_) => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Insertion-ordered mapping of attribute name to value.
///
/// # Example
///
/// ```
/// use tabkit_html::Attributes;
///
/// let mut defaults = Attributes::new().with("class", "fade").with("role", "tabpanel");
/// defaults.merge(Attributes::new().with("role", "region"));
/// defaults.add_class("tab-pane");
///
/// assert_eq!(defaults.get_str("class"), Some("fade tab-pane"));
/// assert_eq!(defaults.render(), r#" class="fade tab-pane" role="region""#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an attribute, replacing any existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Set an attribute only if it is not already present.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Get an attribute value as text.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(AttrValue::as_str)
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove an attribute and return its value.
    ///
    /// Remaining attributes keep their relative order.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.shift_remove(name)
    }

    /// Merge `other` into `self`; values from `other` win on conflict.
    ///
    /// Overridden keys keep their original position.
    pub fn merge(&mut self, other: Attributes) {
        for (name, value) in other.0 {
            self.0.insert(name, value);
        }
    }

    /// Builder form of [`merge`](Self::merge).
    #[must_use]
    pub fn merged(mut self, other: Attributes) -> Self {
        self.merge(other);
        self
    }

    /// Add one or more space-separated CSS classes.
    ///
    /// Classes already present are not duplicated.
    pub fn add_class(&mut self, class: &str) {
        let mut classes: Vec<String> = self
            .get("class")
            .map(ToString::to_string)
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        for name in class.split_whitespace() {
            if !classes.iter().any(|c| c == name) {
                classes.push(name.to_owned());
            }
        }

        self.insert("class", classes.join(" "));
    }

    /// Check whether a CSS class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.get_str("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as an attribute string with a leading space per attribute.
    ///
    /// Returns an empty string for an empty map.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        for name in LEADING_ATTRIBUTES {
            if let Some(value) = self.0.get(*name) {
                write_attribute(&mut out, name, value);
            }
        }
        for (name, value) in &self.0 {
            if !LEADING_ATTRIBUTES.contains(&name.as_str()) {
                write_attribute(&mut out, name, value);
            }
        }

        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn write_attribute(out: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Flag(true) => {
            let _ = write!(out, " {name}");
        }
        AttrValue::Flag(false) => {}
        AttrValue::Integer(n) => {
            let _ = write!(out, r#" {name}="{n}""#);
        }
        AttrValue::Text(s) => {
            let _ = write!(out, r#" {name}="{}""#, escape_html(s));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(Attributes::new().render(), "");
    }

    #[test]
    fn test_leading_attributes_first() {
        let attrs = Attributes::new()
            .with("data-toggle", "tab")
            .with("href", "#pane")
            .with("class", "nav")
            .with("id", "tabs");
        assert_eq!(
            attrs.render(),
            r##" id="tabs" class="nav" href="#pane" data-toggle="tab""##
        );
    }

    #[test]
    fn test_flags_and_integers() {
        let attrs = Attributes::new()
            .with("hidden", true)
            .with("disabled", false)
            .with("tabindex", -1);
        assert_eq!(attrs.render(), r#" hidden tabindex="-1""#);
    }

    #[test]
    fn test_as_id_accepts_text_and_integers() {
        assert_eq!(AttrValue::from("tabs").as_id().as_deref(), Some("tabs"));
        assert_eq!(AttrValue::from(7_i64).as_id().as_deref(), Some("7"));
        assert_eq!(AttrValue::from(false).as_id(), None);
        assert_eq!(AttrValue::from(true).as_id(), None);
    }

    #[test]
    fn test_values_are_escaped() {
        let attrs = Attributes::new().with("title", r#"say "hi" <now>"#);
        assert_eq!(attrs.render(), r#" title="say &quot;hi&quot; &lt;now&gt;""#);
    }

    #[test]
    fn test_add_class_to_empty() {
        let mut attrs = Attributes::new();
        attrs.add_class("tab-pane");
        assert_eq!(attrs.get_str("class"), Some("tab-pane"));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut attrs = Attributes::new().with("class", "nav nav-tabs");
        attrs.add_class("nav-tabs");
        attrs.add_class("active");
        attrs.add_class("active");
        assert_eq!(attrs.get_str("class"), Some("nav nav-tabs active"));
    }

    #[test]
    fn test_add_class_multiple_tokens() {
        let mut attrs = Attributes::new().with("class", "nav");
        attrs.add_class("nav  nav-tabs");
        assert_eq!(attrs.get_str("class"), Some("nav nav-tabs"));
        assert!(attrs.has_class("nav-tabs"));
        assert!(!attrs.has_class("nav-pills"));
    }

    #[test]
    fn test_merge_override_wins_and_keeps_position() {
        let mut attrs = Attributes::new().with("role", "tabpanel").with("class", "fade");
        attrs.merge(Attributes::new().with("class", "in").with("title", "x"));

        let names: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["role", "class", "title"]);
        assert_eq!(attrs.get_str("class"), Some("in"));
    }

    #[test]
    fn test_set_default_keeps_existing() {
        let mut attrs = Attributes::new().with("id", "custom");
        attrs.set_default("id", "w0-tab0");
        assert_eq!(attrs.get_str("id"), Some("custom"));

        let mut empty = Attributes::new();
        empty.set_default("id", "w0-tab0");
        assert_eq!(empty.get_str("id"), Some("w0-tab0"));
    }

    #[test]
    fn test_remove_returns_value() {
        let mut attrs = Attributes::new().with("a", "1").with("b", "2").with("c", "3");
        assert_eq!(attrs.remove("b"), Some(AttrValue::from("2")));
        assert_eq!(attrs.remove("b"), None);

        let names: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let attrs: Attributes =
            serde_yaml::from_str("class: fade\ntabindex: -1\nhidden: true\n").unwrap();
        assert_eq!(attrs.get_str("class"), Some("fade"));
        assert_eq!(attrs.get("tabindex"), Some(&AttrValue::Integer(-1)));
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Flag(true)));
    }

    #[test]
    fn test_deserialize_from_json_preserves_order() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"data-b": "2", "data-a": "1"}"#).unwrap();
        assert_eq!(attrs.render(), r#" data-b="2" data-a="1""#);
    }
}
