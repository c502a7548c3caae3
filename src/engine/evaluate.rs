//! Pure evaluation of a single staged operation.

use super::operator::Operator;
use thiserror::Error;

/// Reasons an evaluation cannot produce a displayable number.
///
/// The engine never returns these to callers; any of them puts the display
/// into the error state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("'{op}' produced a non-finite result")]
    NonFinite { op: Operator },

    #[error("operand '{0}' is not a finite number")]
    InvalidOperand(String),
}

/// Parse an accumulator string, tolerating a trailing decimal point.
pub(crate) fn parse_operand(text: &str) -> Result<f64, EvalError> {
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EvalError::InvalidOperand(text.to_string()))
}

/// Evaluate `lhs op rhs` from their textual forms.
pub fn evaluate(lhs: &str, op: Operator, rhs: &str) -> Result<f64, EvalError> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;

    if op == Operator::Divide && rhs == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    let value = op.apply(lhs, rhs);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { op })
    }
}
