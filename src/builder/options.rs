//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Runtime policy fixed into each machine at build time.
///
/// Deserializes with defaults for missing fields, so a host application can
/// embed it in its own configuration file.
///
/// ```rust
/// use statecraft::builder::MachineOptions;
///
/// let options: MachineOptions = serde_json::from_str(r#"{ "record_history": true }"#).unwrap();
/// assert!(options.strict_transitions);
/// assert!(options.record_history);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Fail `apply` with `UnexpectedEventType` when the current state has no
    /// transition for the event. When false such events are ignored.
    pub strict_transitions: bool,

    /// Keep a journal of every transition the machine makes.
    pub record_history: bool,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            strict_transitions: true,
            record_history: false,
        }
    }
}
