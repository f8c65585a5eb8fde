//! Per-page render state shared by widgets.

use indexmap::IndexMap;

use crate::client::{ClientOptions, ClientScript};

/// Default prefix for generated widget ids.
pub const DEFAULT_ID_PREFIX: &str = "w";

/// Mutable state for one page render.
///
/// Hands out widget ids (`w0`, `w1`, ...) to widgets without an explicit id
/// and collects the client-side calls the widgets register.
///
/// # Example
///
/// ```
/// use tabkit::RenderContext;
///
/// let mut ctx = RenderContext::new();
/// assert_eq!(ctx.next_id(), "w0");
/// assert_eq!(ctx.next_id(), "w1");
/// assert!(ctx.script().is_none());
/// ```
#[derive(Debug)]
pub struct RenderContext {
    id_prefix: String,
    next_id: usize,
    scripts: Vec<ClientScript>,
}

impl RenderContext {
    /// Create a context with the default id prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_prefix(DEFAULT_ID_PREFIX)
    }

    /// Create a context that generates ids as `{prefix}{n}`.
    #[must_use]
    pub fn with_id_prefix(prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: prefix.into(),
            next_id: 0,
            scripts: Vec::new(),
        }
    }

    /// Generate the next widget id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.id_prefix, self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a client plugin and its event handlers for an element.
    ///
    /// Nothing is registered when `options` is [`ClientOptions::Disabled`];
    /// event handlers are registered either way.
    pub fn register_plugin(
        &mut self,
        name: &str,
        target_id: &str,
        options: &ClientOptions,
        events: &IndexMap<String, String>,
    ) {
        if let ClientOptions::Enabled(options) = options {
            self.scripts.push(ClientScript::Plugin {
                name: name.to_owned(),
                target_id: target_id.to_owned(),
                options: options.clone(),
            });
        }
        for (event, handler) in events {
            self.scripts.push(ClientScript::Event {
                target_id: target_id.to_owned(),
                event: event.clone(),
                handler: handler.clone(),
            });
        }
    }

    /// Registered client calls, in registration order.
    #[must_use]
    pub fn scripts(&self) -> &[ClientScript] {
        &self.scripts
    }

    /// All registered calls as JavaScript, one statement per line.
    ///
    /// Returns `None` when nothing was registered.
    #[must_use]
    pub fn script(&self) -> Option<String> {
        if self.scripts.is_empty() {
            return None;
        }
        Some(
            self.scripts
                .iter()
                .map(ClientScript::to_js)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    /// Registered calls wrapped in a `<script>` element run on DOM ready.
    #[must_use]
    pub fn script_block(&self) -> Option<String> {
        self.script()
            .map(|js| format!("<script>jQuery(function ($) {{\n{js}\n}});</script>"))
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_prefix() {
        let mut ctx = RenderContext::with_id_prefix("tabs-");
        assert_eq!(ctx.next_id(), "tabs-0");
        assert_eq!(ctx.next_id(), "tabs-1");
    }

    #[test]
    fn test_disabled_plugin_not_registered() {
        let mut ctx = RenderContext::new();
        ctx.register_plugin("dropdown", "w1", &ClientOptions::Disabled, &IndexMap::new());
        assert!(ctx.scripts().is_empty());
        assert_eq!(ctx.script_block(), None);
    }

    #[test]
    fn test_events_registered_after_plugin() {
        let mut ctx = RenderContext::new();
        let mut events = IndexMap::new();
        events.insert("shown.bs.tab".to_owned(), "onShown".to_owned());
        ctx.register_plugin("tab", "w0", &ClientOptions::default(), &events);

        assert_eq!(
            ctx.script().unwrap(),
            "jQuery('#w0').tab();\njQuery('#w0').on('shown.bs.tab', onShown);"
        );
    }

    #[test]
    fn test_script_block() {
        let mut ctx = RenderContext::new();
        ctx.register_plugin("tab", "w0", &ClientOptions::default(), &IndexMap::new());
        assert_eq!(
            ctx.script_block().unwrap(),
            "<script>jQuery(function ($) {\njQuery('#w0').tab();\n});</script>"
        );
    }
}
