//! Tab widget rendering.

use indexmap::IndexMap;
use serde::Deserialize;
use tabkit_html::{AttrValue, Attributes, escape_html, link, tag};

use crate::client::ClientOptions;
use crate::context::RenderContext;
use crate::dropdown::{DropdownMenu, normalize_dropdown};
use crate::error::TabsError;
use crate::item::{TabBody, TabItem};

/// Marker appended to dropdown tab labels.
const CARET: &str = r#" <b class="caret"></b>"#;

/// Widget-level settings for [`Tabs`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Container id, also the prefix of generated pane ids.
    ///
    /// An `id` in [`options`](Self::options) takes precedence; when neither
    /// is set the [`RenderContext`] generates one.
    pub id: Option<String>,
    /// Attributes for the header `<ul>`. Classes `nav nav-tabs` are always added.
    pub options: Attributes,
    /// Whether to HTML-escape tab labels.
    pub encode_labels: bool,
    /// Default attributes for every pane `<div>`.
    pub item_options: Attributes,
    /// Default attributes for every header `<li>`.
    pub header_options: Attributes,
    /// Options for the `tab` client plugin.
    pub client_options: ClientOptions,
    /// Client event name to JavaScript handler.
    pub client_events: IndexMap<String, String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            id: None,
            options: Attributes::new(),
            encode_labels: true,
            item_options: Attributes::new(),
            header_options: Attributes::new(),
            client_options: ClientOptions::default(),
            client_events: IndexMap::new(),
        }
    }
}

/// A tabbed navigation widget.
///
/// Renders a `<ul class="nav nav-tabs">` of headers followed by a
/// `<div class="tab-content">` of panes, and registers the `tab` client
/// plugin for the header list.
///
/// # Example
///
/// ```
/// use tabkit::{RenderContext, TabItem, Tabs};
///
/// let mut ctx = RenderContext::new();
/// let html = Tabs::new(vec![
///     TabItem::pane("One", "A").active(),
///     TabItem::pane("Two", "B"),
/// ])
/// .render(&mut ctx)
/// .unwrap();
///
/// assert!(html.starts_with(r#"<ul id="w0" class="nav nav-tabs"><li class="active">"#));
/// assert!(html.contains(r#"<div id="w0-tab1" class="tab-pane">B</div>"#));
/// assert_eq!(ctx.script().unwrap(), "jQuery('#w0').tab();");
/// ```
#[derive(Clone, Debug)]
pub struct Tabs {
    items: Vec<TabItem>,
    config: TabsConfig,
}

impl Tabs {
    /// Create a widget with default settings.
    #[must_use]
    pub fn new(items: Vec<TabItem>) -> Self {
        Self {
            items,
            config: TabsConfig::default(),
        }
    }

    /// Replace all widget settings.
    #[must_use]
    pub fn with_config(mut self, config: TabsConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the container id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    /// Set attributes for the header `<ul>`.
    #[must_use]
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.config.options = options;
        self
    }

    /// Whether to HTML-escape tab labels (default: `true`).
    #[must_use]
    pub fn with_encode_labels(mut self, encode_labels: bool) -> Self {
        self.config.encode_labels = encode_labels;
        self
    }

    /// Set default pane attributes.
    #[must_use]
    pub fn with_item_options(mut self, item_options: Attributes) -> Self {
        self.config.item_options = item_options;
        self
    }

    /// Set default header attributes.
    #[must_use]
    pub fn with_header_options(mut self, header_options: Attributes) -> Self {
        self.config.header_options = header_options;
        self
    }

    /// Set options for the `tab` client plugin.
    #[must_use]
    pub fn with_client_options(mut self, client_options: ClientOptions) -> Self {
        self.config.client_options = client_options;
        self
    }

    /// Bind a JavaScript handler to a client event on the header list.
    #[must_use]
    pub fn with_client_event(mut self, event: impl Into<String>, handler: impl Into<String>) -> Self {
        self.config.client_events.insert(event.into(), handler.into());
        self
    }

    /// Render the widget.
    ///
    /// The `tab` plugin is registered on `ctx` only after the markup is
    /// complete, so a failed render registers nothing.
    pub fn render(self, ctx: &mut RenderContext) -> Result<String, TabsError> {
        let TabsConfig {
            id,
            mut options,
            encode_labels,
            item_options,
            header_options: default_header_options,
            client_options,
            client_events,
        } = self.config;

        let container_id = match options.get("id").and_then(AttrValue::as_id).or(id) {
            Some(id) => id,
            None => ctx.next_id(),
        };
        options.insert("id", container_id.as_str());
        options.add_class("nav nav-tabs");

        let mut headers = Vec::with_capacity(self.items.len());
        let mut panes = Vec::new();

        for (n, item) in self.items.into_iter().enumerate() {
            let tab = item.resolve(n)?;
            let mut label = if encode_labels {
                escape_html(&tab.label)
            } else {
                tab.label
            };
            let mut header_options = default_header_options.clone().merged(tab.header_options);

            let header = match tab.body {
                TabBody::Dropdown(entries) => {
                    label.push_str(CARET);
                    header_options.add_class("dropdown");

                    let dropdown = normalize_dropdown(entries, &container_id)?;
                    if dropdown.active {
                        header_options.add_class("active");
                    }
                    panes.extend(dropdown.panes);

                    let toggle = link(
                        &label,
                        "#",
                        Attributes::new()
                            .with("class", "dropdown-toggle")
                            .with("data-toggle", "dropdown"),
                    );
                    // The header list already carries the `tab` plugin.
                    let menu = DropdownMenu::new(dropdown.entries)
                        .with_encode_labels(encode_labels)
                        .with_client_options(ClientOptions::Disabled)
                        .render(ctx)?;
                    format!("{toggle}\n{menu}")
                }
                TabBody::Pane {
                    content,
                    options: pane_options,
                } => {
                    let mut pane_options = item_options.clone().merged(pane_options);
                    let pane_id = match pane_options.get("id").and_then(AttrValue::as_id) {
                        Some(id) => id,
                        None => {
                            let id = format!("{container_id}-tab{n}");
                            pane_options.insert("id", id.as_str());
                            id
                        }
                    };
                    pane_options.add_class("tab-pane");
                    if tab.active {
                        pane_options.add_class("active");
                        header_options.add_class("active");
                    }

                    panes.push(tag("div", &content, &pane_options));

                    link(
                        &label,
                        &format!("#{pane_id}"),
                        Attributes::new().with("data-toggle", "tab"),
                    )
                }
            };

            headers.push(tag("li", &header, &header_options));
        }

        tracing::debug!(
            container = %container_id,
            tabs = headers.len(),
            panes = panes.len(),
            "Rendered tabs"
        );

        let html = format!(
            "{}\n{}",
            tag("ul", &headers.join("\n"), &options),
            tag(
                "div",
                &panes.join("\n"),
                &Attributes::new().with("class", "tab-content")
            )
        );

        ctx.register_plugin("tab", &container_id, &client_options, &client_events);
        Ok(html)
    }
}
