//! Davis adapter error types.

/// Details about why a station payload could not be decoded.
///
/// Surfaced at payload-processing time; the host decides whether to skip
/// the reading or propagate. Deterministic, never transient.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is too short for the requested read.
    #[error("payload must hold {needed} bytes at offset {offset}, got {actual} bytes")]
    BufferTooShort {
        /// Offset the read started at.
        offset: usize,
        /// Bytes required starting at the offset.
        needed: usize,
        /// Actual payload length.
        actual: usize,
    },
}
