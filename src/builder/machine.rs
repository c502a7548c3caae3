//! Builder for constructing calculators.

use crate::builder::config::EngineConfig;
use crate::engine::Calculator;

/// Builder for constructing a [`Calculator`] with a fluent API.
///
/// ```rust
/// use tally::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .track_transitions(true)
///     .history_capacity(32)
///     .tape_capacity(10)
///     .build();
///
/// assert!(calc.history().is_some());
/// assert_eq!(calc.tape().capacity(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: EngineConfig,
}

impl CalculatorBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Record phase transitions (off by default).
    pub fn track_transitions(mut self, enabled: bool) -> Self {
        self.config.track_transitions = enabled;
        self
    }

    /// Bound the transition history.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Bound the tape; zero turns it off.
    pub fn tape_capacity(mut self, capacity: usize) -> Self {
        self.config.tape_capacity = capacity;
        self
    }

    /// Configuration the builder will apply.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the calculator.
    pub fn build(self) -> Calculator {
        Calculator::with_config(&self.config)
    }
}
