//! Input alphabet accepted by the calculator.
//!
//! Adapters classify raw key presses into [`Token`]s before handing them to
//! the engine. The `FromStr` impls here cover the labels a keypad usually
//! carries, so a UI can map button text straight to tokens.

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when mapping key labels to tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTokenError {
    #[error("unrecognised key label '{0}'")]
    UnknownLabel(String),

    #[error("digit out of range: {0}")]
    DigitOutOfRange(u8),
}

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` above nine.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Digit for an ASCII numeral.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = ParseTokenError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseTokenError::DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One classified key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Token {
    /// Digit token for `value`, or `None` above nine.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// Parse a whitespace separated run of key labels.
    ///
    /// A word that is not a label on its own is split into single-character
    /// labels, so `"12.5"` and `"2+3="` both work.
    ///
    /// ```rust
    /// use tally::{Operator, Token};
    ///
    /// let tokens = Token::parse_sequence("12 + 3 =").unwrap();
    /// assert_eq!(tokens.len(), 5);
    /// assert_eq!(tokens[2], Token::Operator(Operator::Add));
    /// ```
    pub fn parse_sequence(input: &str) -> Result<Vec<Token>, ParseTokenError> {
        let mut tokens = Vec::new();
        for word in input.split_whitespace() {
            if let Ok(token) = word.parse::<Token>() {
                tokens.push(token);
                continue;
            }
            let mut buf = [0u8; 4];
            for c in word.chars() {
                let token = c
                    .encode_utf8(&mut buf)
                    .parse::<Token>()
                    .map_err(|_| ParseTokenError::UnknownLabel(word.to_string()))?;
                tokens.push(token);
            }
        }
        Ok(tokens)
    }
}

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let label = label.trim();
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(digit) = Digit::from_char(c) {
                return Ok(Self::Digit(digit));
            }
        }
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }
        match label.to_ascii_lowercase().as_str() {
            "." | "," => Ok(Self::Decimal),
            "=" | "enter" => Ok(Self::Equals),
            "c" | "ac" | "clear" | "esc" => Ok(Self::Clear),
            "⌫" | "<" | "bs" | "back" | "backspace" => Ok(Self::Backspace),
            _ => Err(ParseTokenError::UnknownLabel(label.to_string())),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str("⌫"),
        }
    }
}
