//! The calculator engine and its input/output vocabulary.
//!
//! - [`Token`] and [`Operator`]: the closed input alphabet
//! - [`Calculator`]: the state machine behind `apply(token)`
//! - [`DisplayState`]: the snapshot returned after every token
//! - [`Tape`]: completed calculations for the session

mod display;
mod evaluate;
mod machine;
mod operator;
mod tape;
mod token;

pub use display::{format_number, DisplayState, ERROR_SENTINEL};
pub use evaluate::{evaluate, EvalError};
pub use machine::Calculator;
pub use operator::Operator;
pub use tape::{Tape, TapeEntry};
pub use token::{Digit, ParseTokenError, Token};
