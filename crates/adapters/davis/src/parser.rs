//! Station payload decoding.
//!
//! Pure functions operating on raw `&[u8]` slices — no serial dependency
//! needed. Offsets into the payload are layout specific and supplied by
//! the caller; values are 16-bit little-endian.

use crate::error::DecodeError;

/// Read a signed 16-bit little-endian value at `offset`.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] when fewer than two bytes are
/// available at `offset`.
pub fn read_i16_le(data: &[u8], offset: usize) -> Result<i16, DecodeError> {
    offset
        .checked_add(2)
        .and_then(|end| data.get(offset..end))
        .map(|bytes| i16::from_le_bytes([bytes[0], bytes[1]]))
        .ok_or(DecodeError::BufferTooShort {
            offset,
            needed: 2,
            actual: data.len(),
        })
}

/// Decode a rain-click counter and scale it to a physical measurement.
///
/// Reads the counter as an `i16` little-endian at `offset` and multiplies
/// by `click_size` (physical units per collector click).
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] when fewer than two bytes are
/// available at `offset`.
pub fn decode_rain(data: &[u8], offset: usize, click_size: f64) -> Result<f64, DecodeError> {
    let clicks = read_i16_le(data, offset)?;
    Ok(f64::from(clicks) * click_size)
}
