//! Builder API for configuring calculators.
//!
//! This module provides the fluent [`CalculatorBuilder`], the serde-friendly
//! [`EngineConfig`] it produces, and the `state_enum!` macro used to declare
//! state enums such as [`Phase`](crate::core::Phase).

pub mod config;
pub mod machine;
pub mod macros;

pub use config::EngineConfig;
pub use machine::CalculatorBuilder;
