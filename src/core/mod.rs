//! Core state machine types.
//!
//! This module contains the pure vocabulary the engine is described in:
//! - State classification via the `State` trait and the calculator `Phase`
//! - Guard predicates for admitting input
//! - Bounded history of phase transitions
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod phase;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use phase::Phase;
pub use state::State;
