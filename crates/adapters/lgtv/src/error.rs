//! LG TV binding error types.

/// Errors raised while parsing a binding configuration string.
///
/// Any of these aborts the parse for the whole item; no partial binding
/// store is published. All are deterministic input-validation failures,
/// never transient.
#[derive(Debug, thiserror::Error)]
pub enum ConfigParseError {
    /// A segment did not split into exactly three `:`-separated fields.
    #[error("binding entry '{segment}' must contain three parts separated by ':', got {found}")]
    WrongFieldCount {
        /// The offending comma-delimited segment, trimmed.
        segment: String,
        /// Number of fields the segment actually split into.
        found: usize,
    },

    /// A field was empty after trimming.
    #[error("binding entry '{segment}' has an empty {field} field")]
    EmptyField {
        /// The offending comma-delimited segment, trimmed.
        segment: String,
        /// Which of the three fields was empty.
        field: &'static str,
    },

    /// The device command is not in the vocabulary and carries no
    /// advanced-command marker.
    #[error("unrecognized device command '{command}'")]
    UnknownCommand {
        /// The command name as written in the binding string.
        command: String,
    },
}
