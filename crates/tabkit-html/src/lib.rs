//! Base HTML helpers shared by tabkit widgets.
//!
//! Provides the small set of markup primitives the widgets are assembled from:
//!
//! - [`escape_html`]: escape text for element content and attribute values
//! - [`Attributes`]: insertion-ordered attribute map with CSS class helpers
//! - [`tag`] / [`link`]: element builders
//!
//! # Example
//!
//! ```
//! use tabkit_html::{Attributes, link, tag};
//!
//! let mut attrs = Attributes::new().with("id", "greeting");
//! attrs.add_class("note");
//!
//! let html = tag("div", &link("Home", "/", Attributes::new()), &attrs);
//! assert_eq!(html, r#"<div id="greeting" class="note"><a href="/">Home</a></div>"#);
//! ```

mod attributes;
mod escape;
mod tag;

pub use attributes::{AttrValue, Attributes};
pub use escape::escape_html;
pub use tag::{link, tag};
