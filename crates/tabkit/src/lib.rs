//! Server-side markup rendering for tabbed navigation widgets.
//!
//! A [`Tabs`] widget takes a declarative list of [`TabItem`]s and produces a
//! header list and a matching set of content panes, using the Bootstrap
//! `nav-tabs` / `tab-content` markup conventions. Tabs may open a dropdown of
//! sub-tabs instead of a single pane.
//!
//! # Architecture
//!
//! - [`TabItem`] / [`DropdownEntry`]: declarative input, deserializable from
//!   YAML or JSON; required fields are checked at render time
//! - [`normalize_dropdown`]: splits dropdown tab entries into menu links and panes
//! - [`DropdownMenu`]: renders the nested `<ul class="dropdown-menu">`
//! - [`RenderContext`]: per-page id generation and client plugin registration
//!
//! Client-side show/hide logic is not part of this crate. Widgets register
//! the name of the jQuery plugin that provides it (`tab`, `dropdown`) and the
//! page emits the collected calls via [`RenderContext::script_block`].
//!
//! # Example
//!
//! ```
//! use tabkit::{DropdownItem, RenderContext, TabItem, Tabs};
//!
//! let mut ctx = RenderContext::new();
//! let html = Tabs::new(vec![
//!     TabItem::pane("Overview", "<p>Welcome</p>").active(),
//!     TabItem::dropdown("More", vec![DropdownItem::pane("Billing", "<p>Plans</p>").into()]),
//! ])
//! .with_id("account")
//! .render(&mut ctx)
//! .unwrap();
//!
//! assert!(html.contains(r#"<div id="account-tab0" class="tab-pane active"><p>Welcome</p></div>"#));
//! assert!(html.contains(r#"<div id="account-dd-tab0" class="tab-pane"><p>Plans</p></div>"#));
//! ```

mod client;
mod context;
mod dropdown;
mod error;
mod item;
mod tabs;

pub use client::{ClientOptions, ClientScript};
pub use context::{DEFAULT_ID_PREFIX, RenderContext};
pub use dropdown::{DropdownMenu, NormalizedDropdown, normalize_dropdown};
pub use error::TabsError;
pub use item::{DropdownEntry, DropdownItem, TabItem};
pub use tabs::{Tabs, TabsConfig};
