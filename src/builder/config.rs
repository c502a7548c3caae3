//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default number of phase transitions kept when tracking is enabled.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Default number of completed calculations kept on the tape.
pub const DEFAULT_TAPE_CAPACITY: usize = 64;

/// Knobs that shape a [`Calculator`](crate::Calculator).
///
/// None of these affect arithmetic; they only control what the engine
/// remembers about the session. Missing fields deserialize to defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Record phase transitions into a bounded history.
    pub track_transitions: bool,
    /// Maximum transitions retained when tracking.
    pub history_capacity: usize,
    /// Maximum completed calculations retained on the tape; zero disables it.
    pub tape_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            track_transitions: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            tape_capacity: DEFAULT_TAPE_CAPACITY,
        }
    }
}
