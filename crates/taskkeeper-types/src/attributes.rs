//! Persisted and session-scoped attribute records.
//!
//! `PersistentAttributes` is the per-user record stored behind the
//! `AttributesStore` port; `SessionAttributes` rides on the platform envelope
//! and lives only for the duration of a voice session.

use serde::{Deserialize, Serialize};

/// The per-user persisted record.
///
/// `tasks` is an ordered list of task names. Insertion order is significant:
/// the spoken task numbers are always `1..=len` in current order, so removing
/// an early task renumbers the rest. Names are unique by exact string
/// equality -- no case folding, no trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistentAttributes {
    #[serde(default)]
    pub tasks: Vec<String>,
}

/// Transient attributes scoped to a single voice session.
///
/// The platform echoes these back on every turn of the session; they are
/// never persisted. `launched` records whether a launch request has been
/// handled this session, which decides whether a one-shot "add task"
/// invocation ends the session after its single exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAttributes {
    #[serde(default)]
    pub launched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistent_attributes_default_is_empty() {
        let attrs = PersistentAttributes::default();
        assert!(attrs.tasks.is_empty());
    }

    #[test]
    fn persistent_attributes_roundtrip() {
        let attrs = PersistentAttributes {
            tasks: vec!["milk".to_string(), "eggs".to_string()],
        };
        let json = serde_json::to_string(&attrs).unwrap();
        let back: PersistentAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn session_attributes_tolerate_missing_fields() {
        let attrs: SessionAttributes = serde_json::from_str("{}").unwrap();
        assert!(!attrs.launched);
    }
}
