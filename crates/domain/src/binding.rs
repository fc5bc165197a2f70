//! Binding rules and the per-item binding store.
//!
//! A binding maps host-side trigger commands (e.g. `ON`) to device command
//! targets (e.g. `Livingroom:POWER_ON`). One [`BindingConfig`] exists per
//! bound item. It is built once when the item's configuration is parsed
//! and only read afterwards, so sharing it across threads after
//! construction needs no locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::ItemKind;

/// Prefix marking an advanced device command that bypasses vocabulary
/// validation and is sent to the device verbatim (minus the marker
/// semantics, which stay with the adapter).
pub const ADVANCED_COMMAND_MARKER: char = '#';

/// Wildcard trigger. Carries no structural meaning in the store; hosts
/// match it by convention at dispatch time.
pub const WILDCARD_TRIGGER: &str = "*";

/// Trigger the host issues once at startup, by convention.
pub const INIT_TRIGGER: &str = "INIT";

/// One parsed binding rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    /// Host-side command name that activates this rule.
    pub trigger: String,
    /// Target device identifier.
    pub device_id: String,
    /// Device command: a vocabulary command name, or a raw command
    /// prefixed with [`ADVANCED_COMMAND_MARKER`].
    pub device_command: String,
}

impl BindingEntry {
    /// The composite `device_id:device_command` target stored for lookup.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}:{}", self.device_id, self.device_command)
    }

    /// Whether the device command carries the advanced-command marker.
    #[must_use]
    pub fn is_advanced(&self) -> bool {
        self.device_command.starts_with(ADVANCED_COMMAND_MARKER)
    }
}

/// Per-item store mapping triggers to device command targets.
///
/// When several rules share a trigger, the rule appearing **first** in the
/// configuration string wins; later duplicates are dropped during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingConfig {
    item_kind: ItemKind,
    commands: HashMap<String, String>,
}

impl BindingConfig {
    /// Build a store from parsed rules, resolving duplicate triggers in
    /// favour of the earliest rule.
    ///
    /// Building is idempotent: the same rule sequence always produces the
    /// same store.
    #[must_use]
    pub fn from_entries<I>(item_kind: ItemKind, entries: I) -> Self
    where
        I: IntoIterator<Item = BindingEntry>,
    {
        let mut commands = HashMap::new();
        for entry in entries {
            let target = entry.target();
            commands.entry(entry.trigger).or_insert(target);
        }
        Self {
            item_kind,
            commands,
        }
    }

    /// Kind of the item this store belongs to.
    #[must_use]
    pub fn item_kind(&self) -> ItemKind {
        self.item_kind
    }

    /// Device target (`device_id:device_command`) bound to a trigger.
    #[must_use]
    pub fn device_command(&self, trigger: &str) -> Option<&str> {
        self.commands.get(trigger).map(String::as_str)
    }

    /// Device target bound to the conventional [`INIT_TRIGGER`].
    #[must_use]
    pub fn init_command(&self) -> Option<&str> {
        self.device_command(INIT_TRIGGER)
    }

    /// Iterate over all `(trigger, target)` pairs, in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &str)> {
        self.commands
            .iter()
            .map(|(trigger, target)| (trigger.as_str(), target.as_str()))
    }

    /// Number of distinct triggers in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the store holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
