//! Declarative tab descriptions.
//!
//! These types mirror the shape of tab configuration files (YAML or JSON) and
//! are checked for required fields only when a widget renders them.

use serde::Deserialize;
use tabkit_html::Attributes;

use crate::error::TabsError;

/// One entry in the top-level tab list.
///
/// # Example
///
/// ```
/// use tabkit::TabItem;
/// use tabkit_html::Attributes;
///
/// let tab = TabItem::pane("Profile", "<p>Profile settings</p>")
///     .with_options(Attributes::new().with("id", "profile"))
///     .active();
/// assert!(tab.is_active());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabItem {
    /// Header text. Required.
    pub label: Option<String>,
    /// Attributes for the header `<li>`, merged over the widget defaults.
    #[serde(alias = "headerOptions")]
    pub header_options: Attributes,
    /// Pane body markup.
    pub content: Option<String>,
    /// Nested dropdown entries. Takes precedence over `content`.
    pub items: Option<Vec<DropdownEntry>>,
    /// Attributes for the pane `<div>`, merged over the widget defaults.
    pub options: Attributes,
    /// Whether the header and pane start out visible.
    pub active: bool,
}

impl TabItem {
    /// Create a tab with a label and no content source yet.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Create a tab backed by a single content pane.
    #[must_use]
    pub fn pane(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(label).with_content(content)
    }

    /// Create a tab that opens a dropdown of sub-tabs.
    #[must_use]
    pub fn dropdown(label: impl Into<String>, items: Vec<DropdownEntry>) -> Self {
        Self::new(label).with_items(items)
    }

    /// Set the pane content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the nested dropdown entries.
    #[must_use]
    pub fn with_items(mut self, items: Vec<DropdownEntry>) -> Self {
        self.items = Some(items);
        self
    }

    /// Set pane attributes.
    #[must_use]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Set header attributes.
    #[must_use]
    pub fn with_header_options(mut self, header_options: Attributes) -> Self {
        self.header_options = header_options;
        self
    }

    /// Mark the tab as initially visible.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Whether the tab is marked as initially visible.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check required fields and split the tab into its rendering parts.
    pub(crate) fn resolve(self, index: usize) -> Result<ResolvedTab, TabsError> {
        let Some(label) = self.label else {
            return Err(TabsError::MissingLabel { index });
        };

        let body = match (self.items, self.content) {
            (Some(items), content) => {
                if content.is_some() {
                    tracing::warn!(index, label = %label, "Tab has both items and content, ignoring content");
                }
                TabBody::Dropdown(items)
            }
            (None, Some(content)) => TabBody::Pane {
                content,
                options: self.options,
            },
            (None, None) => return Err(TabsError::MissingContent { index, label }),
        };

        Ok(ResolvedTab {
            label,
            header_options: self.header_options,
            active: self.active,
            body,
        })
    }
}

/// A tab whose required fields have been checked.
#[derive(Debug)]
pub(crate) struct ResolvedTab {
    pub(crate) label: String,
    pub(crate) header_options: Attributes,
    pub(crate) active: bool,
    pub(crate) body: TabBody,
}

/// What a tab header opens.
#[derive(Debug)]
pub(crate) enum TabBody {
    /// A single content pane.
    Pane { content: String, options: Attributes },
    /// A dropdown menu of sub-tabs.
    Dropdown(Vec<DropdownEntry>),
}

/// One entry inside a dropdown list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DropdownEntry {
    /// Opaque markup such as a divider or header, emitted verbatim.
    Raw(String),
    /// A selectable entry.
    Item(DropdownItem),
}

impl DropdownEntry {
    /// Create a verbatim markup entry.
    #[must_use]
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// The structured item, if this is not a raw entry.
    #[must_use]
    pub fn as_item(&self) -> Option<&DropdownItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Raw(_) => None,
        }
    }
}

impl From<DropdownItem> for DropdownEntry {
    fn from(item: DropdownItem) -> Self {
        Self::Item(item)
    }
}

impl From<&str> for DropdownEntry {
    fn from(markup: &str) -> Self {
        Self::Raw(markup.to_owned())
    }
}

/// A structured dropdown entry.
///
/// Inside a tab widget `content` is required and becomes a pane; the
/// remaining fields drive the menu link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownItem {
    /// Menu link text.
    pub label: Option<String>,
    /// Pane body markup.
    pub content: Option<String>,
    /// Attributes for the pane `<div>`.
    #[serde(alias = "contentOptions")]
    pub content_options: Attributes,
    /// Whether the pane starts out visible.
    pub active: bool,
    /// Link target; defaults to `#`.
    pub url: Option<String>,
    /// Attributes for the menu `<a>`.
    #[serde(alias = "linkOptions")]
    pub link_options: Attributes,
    /// Attributes for the menu `<li>`.
    pub options: Attributes,
    /// Hidden entries are skipped by the menu.
    pub visible: Option<bool>,
    /// Sub-menu entries.
    pub items: Vec<DropdownEntry>,
}

impl DropdownItem {
    /// Create an item with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Create a tab pane item.
    #[must_use]
    pub fn pane(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(label).with_content(content)
    }

    /// Set the pane content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set pane attributes.
    #[must_use]
    pub fn with_content_options(mut self, content_options: Attributes) -> Self {
        self.content_options = content_options;
        self
    }

    /// Set the link target.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set sub-menu entries.
    #[must_use]
    pub fn with_items(mut self, items: Vec<DropdownEntry>) -> Self {
        self.items = items;
        self
    }

    /// Hide or show the entry in menus.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Mark the pane as initially visible.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Whether menus should render this entry.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}
