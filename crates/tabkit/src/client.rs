//! Client-side behavior registration.
//!
//! Widgets never ship browser logic themselves. They register the name of a
//! jQuery plugin (`tab`, `dropdown`) against their root element and let the
//! page emit the collected calls.

use std::fmt::Write;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::{CharEscape, CompactFormatter, Formatter};
use serde_json::{Map, Value};

/// Options passed to a widget's client plugin.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "ClientOptionsRepr")]
pub enum ClientOptions {
    /// Do not register the plugin at all.
    Disabled,
    /// Register the plugin with these options (empty means no argument).
    Enabled(Map<String, Value>),
}

impl ClientOptions {
    /// Whether the plugin should be registered.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::Enabled(Map::new())
    }
}

/// Accepts `false`/`true` or an options table.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClientOptionsRepr {
    Flag(bool),
    Options(Map<String, Value>),
}

impl From<ClientOptionsRepr> for ClientOptions {
    fn from(repr: ClientOptionsRepr) -> Self {
        match repr {
            ClientOptionsRepr::Flag(false) => Self::Disabled,
            ClientOptionsRepr::Flag(true) => Self::default(),
            ClientOptionsRepr::Options(map) => Self::Enabled(map),
        }
    }
}

/// A registered client-side call.
#[derive(Clone, Debug, PartialEq)]
pub enum ClientScript {
    /// Plugin initialization: `jQuery('#id').name(options);`
    Plugin {
        /// Plugin name, e.g. `tab`.
        name: String,
        /// Id of the element the plugin is bound to.
        target_id: String,
        /// Plugin options.
        options: Map<String, Value>,
    },
    /// Event handler: `jQuery('#id').on('event', handler);`
    Event {
        /// Id of the element the handler is bound to.
        target_id: String,
        /// Event name, e.g. `shown.bs.tab`.
        event: String,
        /// JavaScript handler expression, emitted verbatim.
        handler: String,
    },
}

impl ClientScript {
    /// Id of the element this call targets.
    #[must_use]
    pub fn target_id(&self) -> &str {
        match self {
            Self::Plugin { target_id, .. } | Self::Event { target_id, .. } => target_id,
        }
    }

    /// Render as a single JavaScript statement.
    #[must_use]
    pub fn to_js(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Plugin {
                name,
                target_id,
                options,
            } => {
                let args = if options.is_empty() {
                    String::new()
                } else {
                    encode_options(options)
                };
                let _ = write!(out, "jQuery('#{target_id}').{name}({args});");
            }
            Self::Event {
                target_id,
                event,
                handler,
            } => {
                let _ = write!(out, "jQuery('#{target_id}').on('{event}', {handler});");
            }
        }
        out
    }
}

/// Encode plugin options as JSON that is safe inside a `<script>` element.
///
/// `<`, `>`, `&`, `'` and `"` inside strings become `\uXXXX` escapes, so
/// option values can never close the element or break out of attributes.
fn encode_options(options: &Map<String, Value>) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    if options.serialize(&mut serializer).is_err() {
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Compact JSON formatter that hex-escapes HTML-significant characters.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\'' => "\\u0027",
                _ => continue,
            };
            writer.write_all(&fragment.as_bytes()[start..i])?;
            writer.write_all(escaped.as_bytes())?;
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match char_escape {
            CharEscape::Quote => writer.write_all(b"\\u0022"),
            other => CompactFormatter.write_char_escape(writer, other),
        }
    }
}
