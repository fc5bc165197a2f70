//! Binding configuration string parsing.
//!
//! Pure functions over the raw string — no registry access, no IO. The
//! host passes each item's declared kind and raw binding string in, and
//! gets back either a complete [`BindingConfig`] or an error; nothing is
//! published on failure.
//!
//! ```text
//! config        := entry ("," entry)*
//! entry         := trigger ":" deviceId ":" deviceCommand
//! deviceCommand := "#" rawCommand | knownCommand
//! ```

use bindhub_domain::binding::{ADVANCED_COMMAND_MARKER, BindingConfig, BindingEntry};
use bindhub_domain::item::ItemKind;

use crate::command::TvCommand;
use crate::error::ConfigParseError;

/// Parse a raw binding configuration string into rules, in string order.
///
/// Whitespace around `,` and `:` is trimmed. A whitespace-only remainder
/// after a comma ends the configuration, so a trailing comma is tolerated;
/// a blank segment followed by further entries is malformed.
///
/// # Errors
///
/// Returns [`ConfigParseError`] when a segment does not have exactly three
/// `:`-separated non-empty fields, or when a device command without the
/// `#` marker is not a known [`TvCommand`].
pub fn parse_binding_config(raw: &str) -> Result<Vec<BindingEntry>, ConfigParseError> {
    let mut entries = Vec::new();
    let mut rest = raw;
    loop {
        let (segment, tail) = match rest.split_once(',') {
            Some((segment, tail)) => (segment, Some(tail)),
            None => (rest, None),
        };
        entries.push(parse_entry(segment)?);
        match tail {
            Some(tail) if !tail.trim().is_empty() => rest = tail,
            _ => break,
        }
    }
    Ok(entries)
}

/// Parse a binding string and build the per-item store in one step.
///
/// This is the operation the host calls for each bound item, handing over
/// the item's declared kind together with the raw string.
///
/// # Errors
///
/// Returns [`ConfigParseError`] when the string is malformed; see
/// [`parse_binding_config`].
pub fn parse_item_binding(kind: ItemKind, raw: &str) -> Result<BindingConfig, ConfigParseError> {
    let entries = parse_binding_config(raw)?;
    tracing::debug!(
        item_kind = %kind,
        rules = entries.len(),
        "parsed binding configuration"
    );
    Ok(BindingConfig::from_entries(kind, entries))
}

fn parse_entry(segment: &str) -> Result<BindingEntry, ConfigParseError> {
    let segment = segment.trim();
    let fields: Vec<&str> = segment.split(':').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ConfigParseError::WrongFieldCount {
            segment: segment.to_string(),
            found: fields.len(),
        });
    }
    let (trigger, device_id, device_command) = (fields[0], fields[1], fields[2]);

    for (field, value) in [
        ("trigger", trigger),
        ("device id", device_id),
        ("device command", device_command),
    ] {
        if value.is_empty() {
            return Err(ConfigParseError::EmptyField {
                segment: segment.to_string(),
                field,
            });
        }
    }

    if !device_command.starts_with(ADVANCED_COMMAND_MARKER) {
        device_command.parse::<TvCommand>()?;
    }

    Ok(BindingEntry {
        trigger: trigger.to_string(),
        device_id: device_id.to_string(),
        device_command: device_command.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use bindhub_domain::binding::WILDCARD_TRIGGER;

    use super::*;

    // ── Single entries ──────────────────────────────────────────────────

    #[test]
    fn should_parse_single_entry() {
        let entries = parse_binding_config("ON:Livingroom:POWER_ON").unwrap();
        assert_eq!(
            entries,
            vec![BindingEntry {
                trigger: "ON".to_string(),
                device_id: "Livingroom".to_string(),
                device_command: "POWER_ON".to_string(),
            }]
        );
    }

    #[test]
    fn should_trim_whitespace_around_fields() {
        let entries = parse_binding_config("  ON : Livingroom : POWER_ON  ").unwrap();
        assert_eq!(entries[0].trigger, "ON");
        assert_eq!(entries[0].device_id, "Livingroom");
        assert_eq!(entries[0].device_command, "POWER_ON");
    }

    #[test]
    fn should_accept_advanced_command_without_vocabulary_check() {
        let entries = parse_binding_config("ON:Livingroom:#NOT_IN_VOCABULARY").unwrap();
        assert_eq!(entries[0].device_command, "#NOT_IN_VOCABULARY");
        assert!(entries[0].is_advanced());
    }

    #[test]
    fn should_reject_unknown_command_without_marker() {
        let err = parse_binding_config("ON:Livingroom:NOT_IN_VOCABULARY").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::UnknownCommand { command } if command == "NOT_IN_VOCABULARY"
        ));
    }

    #[test]
    fn should_reject_lowercase_vocabulary_spelling() {
        let err = parse_binding_config("ON:Livingroom:power_on").unwrap_err();
        assert!(matches!(err, ConfigParseError::UnknownCommand { .. }));
    }

    #[test]
    fn should_reject_two_field_entry() {
        let err = parse_binding_config("ON:Livingroom").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::WrongFieldCount { found: 2, .. }
        ));
    }

    #[test]
    fn should_reject_four_field_entry() {
        let err = parse_binding_config("ON:Livingroom:POWER_ON:EXTRA").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::WrongFieldCount { found: 4, .. }
        ));
    }

    #[test]
    fn should_reject_empty_trigger_field() {
        let err = parse_binding_config(":Livingroom:POWER_ON").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::EmptyField {
                field: "trigger",
                ..
            }
        ));
    }

    #[test]
    fn should_reject_empty_device_id_field() {
        let err = parse_binding_config("ON: :POWER_ON").unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::EmptyField {
                field: "device id",
                ..
            }
        ));
    }

    // ── Multiple entries ────────────────────────────────────────────────

    #[test]
    fn should_parse_entries_in_string_order() {
        let entries =
            parse_binding_config("ON:Livingroom:POWER_ON, OFF:Livingroom:POWER_OFF").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].trigger, "ON");
        assert_eq!(entries[1].trigger, "OFF");
    }

    #[test]
    fn should_tolerate_trailing_comma() {
        let entries = parse_binding_config("ON:Livingroom:POWER_ON,").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn should_tolerate_blank_remainder_after_comma() {
        let entries = parse_binding_config("ON:Livingroom:POWER_ON,   ").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn should_reject_blank_segment_before_further_entries() {
        let err = parse_binding_config("ON:Livingroom:POWER_ON,,OFF:Livingroom:POWER_OFF")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::WrongFieldCount { found: 1, .. }
        ));
    }

    #[test]
    fn should_fail_whole_parse_when_any_entry_is_malformed() {
        let result = parse_binding_config("ON:Livingroom:POWER_ON, OFF:Livingroom");
        assert!(result.is_err());
    }

    // ── Store construction ──────────────────────────────────────────────

    #[test]
    fn should_build_store_with_composite_targets() {
        let config = parse_item_binding(ItemKind::Switch, "ON:Livingroom:POWER_ON").unwrap();
        assert_eq!(config.device_command("ON"), Some("Livingroom:POWER_ON"));
        assert_eq!(config.item_kind(), ItemKind::Switch);
    }

    #[test]
    fn should_keep_first_segment_when_triggers_collide() {
        let config =
            parse_item_binding(ItemKind::Switch, "ON:Livingroom:POWER_ON,ON:Bedroom:POWER_OFF")
                .unwrap();
        assert_eq!(config.device_command("ON"), Some("Livingroom:POWER_ON"));
    }

    #[test]
    fn should_expose_init_rule_through_store() {
        let config = parse_item_binding(
            ItemKind::Switch,
            "INIT:Livingroom:MUTE_OFF, ON:Livingroom:POWER_ON",
        )
        .unwrap();
        assert_eq!(config.init_command(), Some("Livingroom:MUTE_OFF"));
    }

    #[test]
    fn should_publish_nothing_on_failure() {
        let result = parse_item_binding(ItemKind::Switch, "ON:Livingroom:BOGUS");
        assert!(result.is_err());
    }

    #[test]
    fn should_parse_wildcard_trigger_as_plain_string() {
        let config = parse_item_binding(ItemKind::Text, "*:Livingroom:#SOME_RAW").unwrap();
        assert_eq!(
            config.device_command(WILDCARD_TRIGGER),
            Some("Livingroom:#SOME_RAW")
        );
    }
}
