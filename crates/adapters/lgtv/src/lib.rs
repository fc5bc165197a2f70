//! # bindhub-adapter-lgtv
//!
//! LG TV binding adapter — parses the generic binding configuration format
//! into per-item trigger → device-command stores.
//!
//! ## Binding string syntax
//!
//! ```text
//! <trigger>:<device-id>:<device-command>[,<trigger>:<device-id>:<device-command>][,...]
//! ```
//!
//! Examples of valid binding strings:
//!
//! - `ON:Livingroom:POWER_ON, OFF:Livingroom:POWER_OFF`
//! - `UP:Livingroom:VOLUME_UP, DOWN:Livingroom:VOLUME_DOWN`
//!
//! The device command must name a [`TvCommand`] from the fixed vocabulary,
//! unless it starts with `#`, which marks an advanced command passed to
//! the device without validation.
//!
//! ## Dependency rule
//!
//! Depends only on `bindhub-domain`. The host owns the item registry and
//! hands each item's kind and raw string to
//! [`parser::parse_item_binding`] directly.

pub mod command;
mod error;
pub mod parser;

pub use command::TvCommand;
pub use error::ConfigParseError;
pub use parser::{parse_binding_config, parse_item_binding};
