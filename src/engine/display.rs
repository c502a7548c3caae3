//! Snapshot handed to adapters after every token, and number rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown by the result field when evaluation fails.
pub const ERROR_SENTINEL: &str = "Error";

/// What a display should paint after a token has been applied.
///
/// `expression` is the line above the result (`"12+3"`, `"12+3="`), and
/// `result` is the number being edited or the last computed value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub expression: String,
    pub result: String,
}

impl DisplayState {
    /// Whether the result field shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.result == ERROR_SENTINEL
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expression.is_empty() {
            write!(f, "{}", self.result)
        } else {
            write!(f, "{} | {}", self.expression, self.result)
        }
    }
}

/// Canonical text for a finite result.
///
/// Integral values drop the fractional part and negative zero prints as
/// `0`. Everything else uses the shortest representation that parses back
/// to the same `f64`, without exponent notation.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-20.0), "-20");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn large_values_avoid_exponents() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn display_joins_expression_and_result() {
        let state = DisplayState {
            expression: "2+3=".to_string(),
            result: "5".to_string(),
        };
        assert_eq!(state.to_string(), "2+3= | 5");

        let bare = DisplayState {
            expression: String::new(),
            result: "0".to_string(),
        };
        assert_eq!(bare.to_string(), "0");
        assert!(!bare.is_error());
    }
}
