//! Tally: a keypad calculator engine as a deterministic state machine
//!
//! Tally models the behaviour of a pocket calculator. An adapter classifies
//! key presses into [`Token`]s and feeds them to a [`Calculator`]; after every
//! token the engine returns a [`DisplayState`] holding the expression line
//! and the result line. Rendering is left entirely to the adapter.
//!
//! # Core Concepts
//!
//! - **Tokens**: digits, decimal point, the five operators, equals, clear
//!   and backspace
//! - **Phase**: where the engine sits in its input cycle, via the `State` trait
//! - **Guards**: the error phase only admits `Clear`
//! - **History and tape**: optional, bounded, in-memory records of a session
//!
//! Evaluation is left to right without precedence, and a repeated `=`
//! replays the last operation.
//!
//! # Example
//!
//! ```rust
//! use tally::{Calculator, Operator, Token};
//!
//! let mut calc = Calculator::new();
//! calc.apply(Token::digit(2).unwrap());
//! calc.apply(Token::Operator(Operator::Add));
//! calc.apply(Token::digit(3).unwrap());
//! calc.apply(Token::Operator(Operator::Multiply));
//! calc.apply(Token::digit(4).unwrap());
//! let display = calc.apply(Token::Equals);
//!
//! assert_eq!(display.result, "20");
//! assert_eq!(display.expression, "5*4=");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod logging;

// Re-export commonly used types
pub use crate::builder::{CalculatorBuilder, EngineConfig};
pub use crate::core::{Guard, Phase, State, StateHistory, StateTransition};
pub use crate::engine::{Calculator, DisplayState, Operator, ParseTokenError, Token};
