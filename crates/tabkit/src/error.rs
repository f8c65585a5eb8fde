//! Render error types.

/// Configuration error raised while rendering a widget.
///
/// Rendering is all-or-nothing: any of these aborts the whole render and no
/// markup is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabsError {
    /// A top-level tab has no `label`.
    #[error("tab {index}: the 'label' option is required")]
    MissingLabel {
        /// Zero-based position in the tab list.
        index: usize,
    },
    /// A top-level tab has neither `content` nor `items`.
    #[error("tab {index} ({label}): either the 'content' or 'items' option must be set")]
    MissingContent {
        /// Zero-based position in the tab list.
        index: usize,
        /// Label of the offending tab.
        label: String,
    },
    /// A structured dropdown entry has no `content`.
    #[error("dropdown item {index}: the 'content' option is required")]
    MissingDropdownContent {
        /// Zero-based position in the dropdown list.
        index: usize,
    },
    /// A dropdown menu entry has no `label`.
    #[error("menu item {index}: the 'label' option is required")]
    MissingMenuLabel {
        /// Zero-based position in the menu list.
        index: usize,
    },
}
