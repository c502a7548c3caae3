//! The calculator engine: consumes tokens, exposes display snapshots.

use crate::builder::EngineConfig;
use crate::core::{Guard, Phase, State, StateHistory, StateTransition};
use crate::engine::display::{format_number, DisplayState, ERROR_SENTINEL};
use crate::engine::evaluate::{evaluate, EvalError};
use crate::engine::operator::Operator;
use crate::engine::tape::{Tape, TapeEntry};
use crate::engine::token::{Digit, Token};
use chrono::Utc;
use tracing::{debug, trace, warn};

/// Keypad calculator state machine.
///
/// Every key press goes through [`Calculator::apply`], which mutates the
/// engine in place and returns what the display should show. Evaluation is
/// strictly left to right: `2 + 3 * 4 =` gives `20`.
///
/// # Example
///
/// ```rust
/// use tally::{Calculator, Token};
///
/// let mut calc = Calculator::new();
/// let tokens = Token::parse_sequence("5 + 3 = =").unwrap();
/// let display = calc.apply_all(tokens);
///
/// assert_eq!(display.result, "11");
/// assert_eq!(display.expression, "8+3=");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    accumulator: String,
    pending_operator: Option<Operator>,
    previous_operand: Option<String>,
    awaiting_new_operand: bool,
    just_evaluated: bool,
    expression: String,
    /// Operator and right-hand operand replayed by a repeated `=`.
    last_operation: Option<(Operator, String)>,
    input_guard: Guard<Phase>,
    history: Option<StateHistory<Phase>>,
    tape: Tape,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Create an engine from an explicit configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        let history = config
            .track_transitions
            .then(|| StateHistory::with_capacity(config.history_capacity));
        Self {
            accumulator: "0".to_string(),
            pending_operator: None,
            previous_operand: None,
            awaiting_new_operand: false,
            just_evaluated: false,
            expression: String::new(),
            last_operation: None,
            input_guard: Guard::not_error(),
            history,
            tape: Tape::with_capacity(config.tape_capacity),
        }
    }

    /// Apply one token and return the resulting display.
    ///
    /// In the error phase every token except `Clear` is ignored.
    pub fn apply(&mut self, token: Token) -> DisplayState {
        let before = self.phase();
        if token != Token::Clear && !self.input_guard.check(&before) {
            debug!(%token, phase = before.name(), "token ignored");
            return self.display();
        }
        debug!(%token, phase = before.name(), "applying token");

        match token {
            Token::Digit(digit) => self.enter_digit(digit),
            Token::Decimal => self.enter_decimal(),
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::Clear => self.reset(),
            Token::Backspace => self.backspace(),
        }
        if token != Token::Equals {
            self.last_operation = None;
        }

        let after = self.phase();
        if after != before {
            trace!(from = before.name(), to = after.name(), "phase changed");
            if let Some(history) = self.history.as_mut() {
                history.record(StateTransition {
                    from: before,
                    to: after,
                    trigger: token.to_string(),
                    timestamp: Utc::now(),
                });
            }
        }

        self.display()
    }

    /// Apply a sequence of tokens, returning the final display.
    pub fn apply_all<I>(&mut self, tokens: I) -> DisplayState
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.apply(token);
        }
        self.display()
    }

    /// Current display snapshot.
    pub fn display(&self) -> DisplayState {
        DisplayState {
            expression: self.expression.clone(),
            result: self.accumulator.clone(),
        }
    }

    /// Classify the engine's current position in its input cycle.
    pub fn phase(&self) -> Phase {
        if self.accumulator == ERROR_SENTINEL {
            Phase::Error
        } else if self.just_evaluated {
            Phase::Evaluated
        } else if self.pending_operator.is_some() {
            if self.awaiting_new_operand {
                Phase::OperatorStaged
            } else {
                Phase::EnteringSecond
            }
        } else if self.accumulator == "0" && self.expression.is_empty() {
            Phase::Empty
        } else {
            Phase::EnteringFirst
        }
    }

    pub fn is_error(&self) -> bool {
        self.phase().is_error()
    }

    pub fn accumulator(&self) -> &str {
        &self.accumulator
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    /// Phase transitions, if tracking was enabled at construction.
    pub fn history(&self) -> Option<&StateHistory<Phase>> {
        self.history.as_ref()
    }

    /// Completed calculations for this session.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// A new number begins instead of extending the displayed one.
    fn starts_new_calculation(&self) -> bool {
        self.just_evaluated || (self.awaiting_new_operand && self.pending_operator.is_none())
    }

    fn enter_digit(&mut self, digit: Digit) {
        let c = digit.as_char();
        if self.starts_new_calculation() {
            self.start_fresh(c.to_string());
        } else if self.awaiting_new_operand || self.accumulator == "0" {
            self.accumulator = c.to_string();
        } else {
            self.accumulator.push(c);
        }
        self.finish_entry();
    }

    fn enter_decimal(&mut self) {
        if self.starts_new_calculation() {
            self.start_fresh("0.".to_string());
        } else if self.awaiting_new_operand {
            self.accumulator = "0.".to_string();
        } else if !self.accumulator.contains('.') {
            self.accumulator.push('.');
        }
        self.finish_entry();
    }

    fn start_fresh(&mut self, accumulator: String) {
        self.previous_operand = None;
        self.pending_operator = None;
        self.accumulator = accumulator;
    }

    fn finish_entry(&mut self) {
        self.rebuild_expression();
        self.awaiting_new_operand = false;
        self.just_evaluated = false;
    }

    fn rebuild_expression(&mut self) {
        self.expression = match (self.pending_operator, self.previous_operand.as_deref()) {
            (Some(op), Some(lhs)) => format!("{lhs}{op}{}", self.accumulator),
            _ => self.accumulator.clone(),
        };
    }

    fn press_operator(&mut self, op: Operator) {
        if self.pending_operator.is_some() && !self.awaiting_new_operand {
            if self.evaluate_pending().is_err() {
                return;
            }
        } else if self.pending_operator.is_none() {
            self.previous_operand = Some(self.accumulator.clone());
        }

        self.pending_operator = Some(op);
        let lhs = self.previous_operand.as_deref().unwrap_or("0");
        self.expression = format!("{lhs}{op}");
        self.awaiting_new_operand = true;
        self.just_evaluated = false;
    }

    fn press_equals(&mut self) {
        if self.just_evaluated {
            if let Some((op, rhs)) = self.last_operation.clone() {
                self.repeat_operation(op, rhs);
                return;
            }
        }

        match self.pending_operator {
            None => {
                if self.expression.is_empty() {
                    self.expression = self.accumulator.clone();
                }
                if !self.expression.ends_with('=') {
                    self.expression.push('=');
                }
                self.previous_operand = None;
                self.last_operation = None;
            }
            Some(op) if self.awaiting_new_operand => {
                let lhs = self.previous_operand.as_deref().unwrap_or(&self.accumulator);
                self.expression = format!("{lhs}{op}=");
                self.pending_operator = None;
                self.previous_operand = None;
                self.last_operation = None;
            }
            Some(op) => {
                let rhs = self.accumulator.clone();
                let lhs = self.previous_operand.as_deref().unwrap_or("0");
                let captured = format!("{lhs}{op}{rhs}=");
                if self.evaluate_pending().is_err() {
                    return;
                }
                self.expression = captured;
                self.last_operation = Some((op, rhs));
                self.just_evaluated = true;
                self.awaiting_new_operand = true;
            }
        }
    }

    /// Replay the last operation against the displayed result.
    fn repeat_operation(&mut self, op: Operator, rhs: String) {
        let lhs = std::mem::replace(&mut self.accumulator, rhs.clone());
        let captured = format!("{lhs}{op}{rhs}=");
        self.previous_operand = Some(lhs);
        self.pending_operator = Some(op);
        if self.evaluate_pending().is_err() {
            return;
        }
        self.expression = captured;
        self.just_evaluated = true;
        self.awaiting_new_operand = true;
    }

    /// Evaluate `previous_operand pending_operator accumulator` in place.
    ///
    /// On success the result becomes both the accumulator and the staged
    /// left operand, and the pending operator is cleared. On failure the
    /// engine is in the error phase when this returns.
    fn evaluate_pending(&mut self) -> Result<(), EvalError> {
        let (Some(op), Some(lhs)) = (self.pending_operator, self.previous_operand.as_deref())
        else {
            return Ok(());
        };
        let expression = format!("{lhs}{op}{}", self.accumulator);

        match evaluate(lhs, op, &self.accumulator) {
            Ok(value) => {
                let result = format_number(value);
                debug!(%expression, %result, "evaluated");
                self.tape.push(TapeEntry {
                    expression,
                    result: result.clone(),
                });
                self.accumulator = result.clone();
                self.previous_operand = Some(result);
                self.pending_operator = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, %expression, "evaluation failed");
                self.enter_error();
                Err(err)
            }
        }
    }

    fn enter_error(&mut self) {
        self.accumulator = ERROR_SENTINEL.to_string();
        self.expression.clear();
        self.previous_operand = None;
        self.pending_operator = None;
        self.awaiting_new_operand = false;
        self.just_evaluated = false;
        self.last_operation = None;
    }

    fn reset(&mut self) {
        self.accumulator = "0".to_string();
        self.pending_operator = None;
        self.previous_operand = None;
        self.awaiting_new_operand = false;
        self.just_evaluated = false;
        self.expression.clear();
        self.last_operation = None;
    }

    fn backspace(&mut self) {
        if self.awaiting_new_operand || self.just_evaluated {
            self.reset();
            return;
        }

        if self.accumulator.chars().count() <= 1 {
            self.accumulator = "0".to_string();
        } else {
            self.accumulator.pop();
            if self.accumulator == "-" {
                self.accumulator = "0".to_string();
            }
        }

        if self.pending_operator.is_some() {
            self.rebuild_expression();
        } else if self.accumulator == "0" {
            self.expression.clear();
            self.previous_operand = None;
        } else {
            self.expression = self.accumulator.clone();
        }
    }
}
