//! Keypad Session
//!
//! This example walks a calculator through a short session and prints the
//! display after every key press.
//!
//! Key concepts:
//! - Tokens classified from keypad labels
//! - Left-to-right chaining and repeat-equals
//! - The error phase and recovery through Clear
//! - Phase history and the session tape
//!
//! Run with: cargo run --example keypad_session

use tally::{CalculatorBuilder, State, Token};

fn main() {
    println!("=== Keypad Session ===\n");

    let mut calc = CalculatorBuilder::new().track_transitions(true).build();

    let keys = "1 2 + 3 × 2 = = C 7 ÷ 0 = 4 C 9 . 5 ⌫ 7 % 4 =";
    let tokens = match Token::parse_sequence(keys) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("bad key sequence: {err}");
            return;
        }
    };

    println!("{:<6} {:<16} {:<12} Phase", "Key", "Expression", "Result");
    for token in tokens {
        let display = calc.apply(token);
        println!(
            "{:<6} {:<16} {:<12} {}",
            token.to_string(),
            display.expression,
            display.result,
            calc.phase().name()
        );
    }

    println!("\nTape:");
    for entry in calc.tape().entries() {
        println!("  {entry}");
    }

    if let Some(history) = calc.history() {
        let path: Vec<&str> = history.get_path().into_iter().map(|p| p.name()).collect();
        println!("\nPhase path:\n  {}", path.join(" -> "));
    }

    println!("\nKey Characteristics:");
    println!("- 12 + 3 × 2 evaluates left to right as (12 + 3) × 2");
    println!("- A second = repeats the last operation");
    println!("- Division by zero shows Error until Clear");

    println!("\n=== Example Complete ===");
}
