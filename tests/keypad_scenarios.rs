//! End-to-end key sequences, checked the way a user would read the display.

use tally::{Calculator, CalculatorBuilder, DisplayState, Phase, Token};

fn press(calc: &mut Calculator, keys: &str) -> DisplayState {
    calc.apply_all(Token::parse_sequence(keys).unwrap())
}

fn fresh(keys: &str) -> DisplayState {
    press(&mut Calculator::new(), keys)
}

#[test]
fn digits_display_as_typed() {
    assert_eq!(fresh("4 0 9").result, "409");
    assert_eq!(fresh("0 0 0 1").result, "1");
}

#[test]
fn chaining_has_no_precedence() {
    let display = fresh("2 + 3 * 4 =");
    assert_eq!(display.result, "20");
}

#[test]
fn repeat_equals_repeats_last_operation() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "5 + 3 =").result, "8");
    assert_eq!(press(&mut calc, "=").result, "11");
    assert_eq!(press(&mut calc, "=").result, "14");
}

#[test]
fn division_by_zero_recovers_through_clear() {
    let mut calc = Calculator::new();
    assert_eq!(press(&mut calc, "2 / 0 =").result, "Error");
    assert_eq!(press(&mut calc, "3").result, "Error");
    assert_eq!(calc.phase(), Phase::Error);
    assert_eq!(press(&mut calc, "C 5").result, "5");
}

#[test]
fn backspace_on_result_is_clear() {
    let display = fresh("2 + 2 = ⌫");
    assert_eq!(
        display,
        DisplayState {
            expression: String::new(),
            result: "0".to_string(),
        }
    );
}

#[test]
fn backspace_during_entry() {
    assert_eq!(fresh("1 2 3 ⌫").result, "12");
    assert_eq!(fresh("5 ⌫").result, "0");
}

#[test]
fn expression_line_tracks_each_press() {
    let mut calc = Calculator::new();
    let lines: Vec<String> = Token::parse_sequence("1 2 + 7 = * 2")
        .unwrap()
        .into_iter()
        .map(|token| calc.apply(token).expression)
        .collect();
    assert_eq!(
        lines,
        vec!["1", "12", "12+", "12+7", "12+7=", "19*", "19*2"]
    );
}

#[test]
fn typographic_labels_drive_the_engine() {
    assert_eq!(fresh("9 × 3 ÷ 2 =").result, "13.5");
}

#[test]
fn session_tape_and_history() {
    let mut calc = CalculatorBuilder::new().track_transitions(true).build();
    press(&mut calc, "6 * 7 = C 1 0 - 4 =");

    let tape: Vec<String> = calc.tape().entries().map(ToString::to_string).collect();
    assert_eq!(tape, vec!["6*7 = 42", "10-4 = 6"]);

    let history = calc.history().unwrap();
    assert_eq!(history.get_path().first(), Some(&&Phase::Empty));
    assert_eq!(history.get_path().last(), Some(&&Phase::Evaluated));
}

#[test]
fn display_state_serializes_for_adapters() {
    let display = fresh("1 . 5 + 1 =");
    let json = serde_json::to_string(&display).unwrap();
    assert_eq!(json, r#"{"expression":"1.5+1=","result":"2.5"}"#);

    let decoded: DisplayState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, display);
}
