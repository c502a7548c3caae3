//! Property-based tests for the calculator engine.
//!
//! These tests use proptest to drive the engine with random key streams
//! and check the display invariants after every press.

use proptest::prelude::*;
use tally::{Calculator, Operator, Phase, State, Token};

fn arbitrary_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

fn arbitrary_digit() -> impl Strategy<Value = Token> {
    (0u8..=9).prop_map(|d| Token::digit(d).unwrap())
}

fn arbitrary_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        6 => arbitrary_digit(),
        1 => Just(Token::Decimal),
        2 => arbitrary_operator().prop_map(Token::Operator),
        1 => Just(Token::Equals),
        1 => Just(Token::Clear),
        1 => Just(Token::Backspace),
    ]
}

fn result_is_well_formed(result: &str) -> bool {
    if result == "Error" {
        return true;
    }
    if result.is_empty() || result.matches('.').count() > 1 {
        return false;
    }
    let numeric = result.strip_suffix('.').unwrap_or(result);
    numeric.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

proptest! {
    #[test]
    fn accumulator_stays_well_formed(tokens in prop::collection::vec(arbitrary_token(), 0..60)) {
        let mut calc = Calculator::new();
        for token in tokens {
            let display = calc.apply(token);
            prop_assert!(
                result_is_well_formed(&display.result),
                "malformed result {:?} after {}",
                display.result,
                token
            );
            prop_assert_eq!(display.is_error(), calc.phase().is_error());
            prop_assert!(
                calc.pending_operator().is_none() || calc.previous_operand().is_some(),
                "operator pending without a left operand after {}",
                token
            );
        }
    }

    #[test]
    fn clear_resets_from_any_state(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut calc = Calculator::new();
        calc.apply_all(tokens);

        let display = calc.apply(Token::Clear);
        prop_assert_eq!(display.result, "0");
        prop_assert_eq!(display.expression, "");
        prop_assert_eq!(calc.phase(), Phase::Empty);
        prop_assert_eq!(calc.pending_operator(), None);
    }

    #[test]
    fn digit_sequences_echo_without_leading_zeros(digits in prop::collection::vec(0u8..=9, 1..15)) {
        let mut calc = Calculator::new();
        let display = calc.apply_all(digits.iter().map(|&d| Token::digit(d).unwrap()));

        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(display.result, expected);
    }

    #[test]
    fn second_decimal_is_a_no_op(
        prefix in prop::collection::vec(arbitrary_token(), 0..20),
        digit in arbitrary_digit(),
    ) {
        let mut once = Calculator::new();
        once.apply_all(prefix.iter().copied());
        once.apply(digit);
        let single = once.apply(Token::Decimal);

        let mut twice = Calculator::new();
        twice.apply_all(prefix.iter().copied());
        twice.apply(digit);
        twice.apply(Token::Decimal);
        let double = twice.apply(Token::Decimal);

        prop_assert_eq!(single, double);
        prop_assert_eq!(once.phase(), twice.phase());
    }

    #[test]
    fn error_absorbs_everything_but_clear(
        tokens in prop::collection::vec(arbitrary_token(), 0..30)
    ) {
        let mut calc = Calculator::new();
        calc.apply_all(Token::parse_sequence("7 / 0 =").unwrap());
        prop_assert!(calc.is_error());

        for token in tokens.into_iter().filter(|t| *t != Token::Clear) {
            let display = calc.apply(token);
            prop_assert_eq!(display.result, "Error");
            prop_assert_eq!(display.expression, "");
        }
    }

    #[test]
    fn engines_are_deterministic(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut a = Calculator::new();
        let mut b = Calculator::new();
        for token in tokens {
            prop_assert_eq!(a.apply(token), b.apply(token));
        }
    }

    #[test]
    fn single_operation_matches_float_arithmetic(
        lhs in 0u32..10_000,
        rhs in 1u32..10_000,
        op in arbitrary_operator(),
    ) {
        let mut calc = Calculator::new();
        let keys = format!("{lhs} {op} {rhs} =");
        let display = calc.apply_all(Token::parse_sequence(&keys).unwrap());

        let expected = tally::engine::format_number(op.apply(lhs as f64, rhs as f64));
        prop_assert_eq!(display.result, expected);
        prop_assert_eq!(display.expression, format!("{lhs}{op}{rhs}="));
    }

    #[test]
    fn phase_names_are_stable(tokens in prop::collection::vec(arbitrary_token(), 0..20)) {
        let mut calc = Calculator::new();
        calc.apply_all(tokens);
        let phase = calc.phase();
        prop_assert_eq!(phase.name(), phase.name());
        prop_assert_eq!(phase.is_final(), phase == Phase::Error);
    }
}
