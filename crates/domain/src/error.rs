//! Common error types used across the workspace.
//!
//! Each crate defines its own typed errors with `thiserror`; only errors
//! shared by several consumers live here.

/// An item-type descriptor that names none of the supported
/// [`ItemKind`](crate::item::ItemKind)s.
#[derive(Debug, thiserror::Error)]
#[error(
    "unsupported item kind '{kind}', expected one of switch, number, dimmer, rollershutter, text"
)]
pub struct UnknownItemKind {
    /// The descriptor as supplied by the host.
    pub kind: String,
}
