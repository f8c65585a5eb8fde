//! Dropdown menus and dropdown tab normalization.

use indexmap::IndexMap;
use tabkit_html::{AttrValue, Attributes, escape_html, link, tag};

use crate::client::ClientOptions;
use crate::context::RenderContext;
use crate::error::TabsError;
use crate::item::DropdownEntry;

/// Result of [`normalize_dropdown`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizedDropdown {
    /// Menu entries with pane fields removed and link targets filled in.
    pub entries: Vec<DropdownEntry>,
    /// One pane `<div>` per structured entry, in order.
    pub panes: Vec<String>,
    /// Whether any entry was marked active.
    pub active: bool,
}

/// Split dropdown tab entries into menu entries and content panes.
///
/// For each structured entry at position `n`:
///
/// - `content` is required and becomes a `<div class="tab-pane">` pane with
///   id `{container_id}-dd-tab{n}` unless `content_options` sets one
/// - `content` and `content_options` are removed from the returned entry
/// - the returned entry links to `#{pane id}` with `data-toggle="tab"`
/// - an active entry marks its pane and its menu `<li>` as `active`
///
/// Raw entries pass through unchanged and produce no pane, but still count
/// toward `n`.
///
/// The returned entries are meant for a [`DropdownMenu`]; feeding them back
/// into this function fails because their content has been taken.
///
/// # Example
///
/// ```
/// use tabkit::{DropdownItem, normalize_dropdown};
///
/// let items = vec![DropdownItem::pane("X", "x").active().into(), DropdownItem::pane("Y", "y").into()];
/// let normalized = normalize_dropdown(items, "w0").unwrap();
///
/// assert!(normalized.active);
/// assert_eq!(normalized.panes[1], r#"<div id="w0-dd-tab1" class="tab-pane">y</div>"#);
/// ```
pub fn normalize_dropdown(
    entries: Vec<DropdownEntry>,
    container_id: &str,
) -> Result<NormalizedDropdown, TabsError> {
    let mut normalized = NormalizedDropdown {
        entries: Vec::with_capacity(entries.len()),
        panes: Vec::new(),
        active: false,
    };

    for (n, entry) in entries.into_iter().enumerate() {
        let mut item = match entry {
            DropdownEntry::Raw(_) => {
                normalized.entries.push(entry);
                continue;
            }
            DropdownEntry::Item(item) => item,
        };

        let Some(content) = item.content.take() else {
            return Err(TabsError::MissingDropdownContent { index: n });
        };
        let mut options = std::mem::take(&mut item.content_options);

        options.add_class("tab-pane");
        if std::mem::take(&mut item.active) {
            options.add_class("active");
            item.options.add_class("active");
            normalized.active = true;
        }

        let pane_id = match options.get("id").and_then(AttrValue::as_id) {
            Some(id) => id,
            None => {
                let id = format!("{container_id}-dd-tab{n}");
                options.insert("id", id.as_str());
                id
            }
        };
        item.url = Some(format!("#{pane_id}"));
        item.link_options.insert("data-toggle", "tab");

        normalized.panes.push(tag("div", &content, &options));
        normalized.entries.push(DropdownEntry::Item(item));
    }

    Ok(normalized)
}

/// Renders a `<ul class="dropdown-menu">` of menu links.
///
/// # Example
///
/// ```
/// use tabkit::{DropdownItem, DropdownMenu, RenderContext};
///
/// let mut ctx = RenderContext::new();
/// let html = DropdownMenu::new(vec![DropdownItem::new("Docs").with_url("/docs").into()])
///     .render(&mut ctx)
///     .unwrap();
///
/// assert_eq!(
///     html,
///     "<ul id=\"w0\" class=\"dropdown-menu\"><li><a href=\"/docs\" tabindex=\"-1\">Docs</a></li></ul>"
/// );
/// ```
#[derive(Debug)]
pub struct DropdownMenu {
    entries: Vec<DropdownEntry>,
    options: Attributes,
    encode_labels: bool,
    client_options: ClientOptions,
    client_events: IndexMap<String, String>,
}

impl DropdownMenu {
    /// Create a menu for the given entries.
    #[must_use]
    pub fn new(entries: Vec<DropdownEntry>) -> Self {
        Self {
            entries,
            options: Attributes::new(),
            encode_labels: true,
            client_options: ClientOptions::default(),
            client_events: IndexMap::new(),
        }
    }

    /// Set attributes for the menu `<ul>`.
    #[must_use]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Whether to HTML-escape entry labels (default: `true`).
    #[must_use]
    pub fn with_encode_labels(mut self, encode_labels: bool) -> Self {
        self.encode_labels = encode_labels;
        self
    }

    /// Set options for the `dropdown` client plugin.
    #[must_use]
    pub fn with_client_options(mut self, client_options: ClientOptions) -> Self {
        self.client_options = client_options;
        self
    }

    /// Bind a JavaScript handler to a client event on the menu.
    #[must_use]
    pub fn with_client_event(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        self.client_events.insert(event.into(), handler.into());
        self
    }

    /// Render the menu and register the `dropdown` plugin.
    pub fn render(mut self, ctx: &mut RenderContext) -> Result<String, TabsError> {
        let id = match self.options.get("id").and_then(AttrValue::as_id) {
            Some(id) => id,
            None => ctx.next_id(),
        };
        self.options.insert("id", id.as_str());
        self.options.add_class("dropdown-menu");

        let lines = render_entries(&self.entries, self.encode_labels)?;
        let html = tag("ul", &lines.join("\n"), &self.options);

        ctx.register_plugin("dropdown", &id, &self.client_options, &self.client_events);
        Ok(html)
    }
}

/// Render menu `<li>` lines, recursing into sub-menus.
fn render_entries(entries: &[DropdownEntry], encode_labels: bool) -> Result<Vec<String>, TabsError> {
    let mut lines = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let item = match entry {
            DropdownEntry::Raw(markup) => {
                lines.push(markup.clone());
                continue;
            }
            DropdownEntry::Item(item) => item,
        };
        if !item.is_visible() {
            continue;
        }

        let Some(label) = item.label.as_deref() else {
            return Err(TabsError::MissingMenuLabel { index });
        };
        let label = if encode_labels {
            escape_html(label)
        } else {
            label.to_owned()
        };

        let mut options = item.options.clone();
        let mut link_options = item.link_options.clone();
        link_options.insert("tabindex", "-1");
        let mut content = link(&label, item.url.as_deref().unwrap_or("#"), link_options);

        if !item.items.is_empty() {
            let sub = render_entries(&item.items, encode_labels)?;
            let sub_options = Attributes::new().with("class", "dropdown-menu");
            content.push_str(&tag("ul", &sub.join("\n"), &sub_options));
            options.add_class("dropdown-submenu");
        }

        lines.push(tag("li", &content, &options));
    }

    Ok(lines)
}
