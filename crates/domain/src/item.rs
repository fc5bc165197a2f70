//! Item kinds — the closed set of item types a binding may be attached to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownItemKind;

/// Kind of host item a binding belongs to.
///
/// Only these five kinds can carry a binding; any other descriptor is
/// rejected when the host hands it over, before parsing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Switch,
    Number,
    Dimmer,
    Rollershutter,
    Text,
}

impl ItemKind {
    /// Lowercase descriptor name, as used in host configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Number => "number",
            Self::Dimmer => "dimmer",
            Self::Rollershutter => "rollershutter",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = UnknownItemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "switch" => Ok(Self::Switch),
            "number" => Ok(Self::Number),
            "dimmer" => Ok(Self::Dimmer),
            "rollershutter" => Ok(Self::Rollershutter),
            "text" => Ok(Self::Text),
            other => Err(UnknownItemKind {
                kind: other.to_string(),
            }),
        }
    }
}
