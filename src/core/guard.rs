//! Guard predicates for admitting input in a given state.
//!
//! Guards are pure boolean functions over a state. The calculator uses one
//! to decide whether a token may touch the engine at all.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that decides whether a state admits a transition.
///
/// Cloning a guard shares the predicate.
///
/// # Example
///
/// ```rust
/// use tally::core::{Guard, Phase, State};
///
/// let accepts_input = Guard::new(|phase: &Phase| !phase.is_error());
///
/// assert!(accepts_input.check(&Phase::EnteringFirst));
/// assert!(!accepts_input.check(&Phase::Error));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that admits every state except error states.
    pub fn not_error() -> Self {
        Self::new(|state: &S| !state.is_error())
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn not_error_rejects_only_error_phase() {
        let guard = Guard::<Phase>::not_error();

        assert!(guard.check(&Phase::Empty));
        assert!(guard.check(&Phase::OperatorStaged));
        assert!(guard.check(&Phase::Evaluated));
        assert!(!guard.check(&Phase::Error));
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|p: &Phase| matches!(p, Phase::EnteringFirst));

        assert!(guard.check(&Phase::EnteringFirst));
        assert!(!guard.check(&Phase::EnteringSecond));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|p: &Phase| matches!(p, Phase::Empty | Phase::Evaluated));
        let cloned = guard.clone();

        for phase in [Phase::Empty, Phase::EnteringFirst, Phase::Evaluated] {
            assert_eq!(guard.check(&phase), cloned.check(&phase));
        }
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::<Phase>::not_error();
        assert_eq!(
            guard.check(&Phase::EnteringSecond),
            guard.check(&Phase::EnteringSecond)
        );
    }
}
