//! Core State trait for classifying where an engine is in its input cycle.
//!
//! States are plain values; inspecting them never mutates the engine they
//! were read from.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state describes the current position in a state
/// machine and is cheap to copy into history records.
///
/// # Required Traits
///
/// - `Clone`: states are stored in transition history
/// - `PartialEq`: transitions are only recorded when the state changes
/// - `Debug`: diagnostics and tracing fields
/// - `Serialize` + `Deserialize`: snapshots can be shipped to adapters
///
/// # Example
///
/// ```rust
/// use tally::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum KeypadState {
///     Idle,
///     Typing,
///     Locked,
/// }
///
/// impl State for KeypadState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Typing => "Typing",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert!(KeypadState::Locked.is_error());
/// assert!(!KeypadState::Typing.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states only leave through an explicit reset.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Typing,
        Locked,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Typing => "Typing",
                Self::Locked => "Locked",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Locked)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Locked)
        }
    }

    #[test]
    fn default_methods_are_false() {
        #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
        struct Only;

        impl State for Only {
            fn name(&self) -> &str {
                "Only"
            }
        }

        assert!(!Only.is_final());
        assert!(!Only.is_error());
    }

    #[test]
    fn overrides_classify_states() {
        assert_eq!(TestState::Typing.name(), "Typing");
        assert!(!TestState::Idle.is_error());
        assert!(TestState::Locked.is_final());
        assert!(TestState::Locked.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Typing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
