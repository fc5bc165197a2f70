//! TV command vocabulary.
//!
//! The closed set of device commands the binding accepts without the
//! advanced-command marker. Names are matched case-exactly against the
//! wire spelling (`VOLUME_UP`, not `volume_up`).

use std::str::FromStr;

use crate::error::ConfigParseError;

/// A device command from the fixed TV control vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TvCommand {
    PowerOn,
    PowerOff,
    VolumeUp,
    VolumeDown,
    VolumeSet,
    MuteOn,
    MuteOff,
    ChannelUp,
    ChannelDown,
    ChannelSet,
    InputTv,
    InputHdmi1,
    InputHdmi2,
    KeyUp,
    KeyDown,
    KeyLeft,
    KeyRight,
    KeyOk,
    KeyBack,
    KeyExit,
}

impl TvCommand {
    /// Every command in the vocabulary.
    pub const ALL: &'static [Self] = &[
        Self::PowerOn,
        Self::PowerOff,
        Self::VolumeUp,
        Self::VolumeDown,
        Self::VolumeSet,
        Self::MuteOn,
        Self::MuteOff,
        Self::ChannelUp,
        Self::ChannelDown,
        Self::ChannelSet,
        Self::InputTv,
        Self::InputHdmi1,
        Self::InputHdmi2,
        Self::KeyUp,
        Self::KeyDown,
        Self::KeyLeft,
        Self::KeyRight,
        Self::KeyOk,
        Self::KeyBack,
        Self::KeyExit,
    ];

    /// Exact wire spelling of the command.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => "POWER_ON",
            Self::PowerOff => "POWER_OFF",
            Self::VolumeUp => "VOLUME_UP",
            Self::VolumeDown => "VOLUME_DOWN",
            Self::VolumeSet => "VOLUME_SET",
            Self::MuteOn => "MUTE_ON",
            Self::MuteOff => "MUTE_OFF",
            Self::ChannelUp => "CHANNEL_UP",
            Self::ChannelDown => "CHANNEL_DOWN",
            Self::ChannelSet => "CHANNEL_SET",
            Self::InputTv => "INPUT_TV",
            Self::InputHdmi1 => "INPUT_HDMI1",
            Self::InputHdmi2 => "INPUT_HDMI2",
            Self::KeyUp => "KEY_UP",
            Self::KeyDown => "KEY_DOWN",
            Self::KeyLeft => "KEY_LEFT",
            Self::KeyRight => "KEY_RIGHT",
            Self::KeyOk => "KEY_OK",
            Self::KeyBack => "KEY_BACK",
            Self::KeyExit => "KEY_EXIT",
        }
    }
}

impl std::fmt::Display for TvCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TvCommand {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| ConfigParseError::UnknownCommand {
                command: s.to_string(),
            })
    }
}
