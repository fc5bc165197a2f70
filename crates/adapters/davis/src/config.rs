//! Davis station configuration.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::parser;

/// Configuration for the Davis station integration.
///
/// Owned by process-wide configuration; read-only once the host has
/// initialised it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DavisConfig {
    /// Physical units of rain per collector click (e.g. `0.2` for the
    /// metric 0.2 mm collector).
    pub rain_click_size: f64,
}

impl Default for DavisConfig {
    fn default() -> Self {
        Self {
            rain_click_size: 0.2,
        }
    }
}

impl DavisConfig {
    /// Decode a rain reading using the configured click size.
    ///
    /// `offset` is layout specific and supplied by the host along with the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::BufferTooShort`] when fewer than two bytes
    /// are available at `offset`.
    pub fn decode_rain(&self, data: &[u8], offset: usize) -> Result<f64, DecodeError> {
        parser::decode_rain(data, offset, self.rain_click_size)
    }
}
