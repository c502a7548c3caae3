//! Terminal keypad for the tally engine.
//!
//! Reads key labels from `--keys` or from stdin, one line at a time, and
//! prints the display after each line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tally::logging::{self, LoggingConfig};
use tally::{Calculator, CalculatorBuilder, State, Token};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Keypad calculator driven by key labels", version)]
struct Cli {
    /// Keys to press, e.g. "12 + 3 =". Reads stdin when omitted.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print each display as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the tape of completed calculations on exit
    #[arg(long)]
    tape: bool,

    /// Print phase transitions on exit
    #[arg(long)]
    history: bool,

    /// Number of completed calculations kept on the tape
    #[arg(long, env = "TALLY_TAPE_CAPACITY", default_value_t = tally::builder::config::DEFAULT_TAPE_CAPACITY)]
    tape_capacity: usize,

    /// Log level when RUST_LOG is unset
    #[arg(long, env = "TALLY_LOG", default_value = "warn")]
    log_level: String,

    /// Per-target level override, e.g. "tally::engine=debug" (repeatable)
    #[arg(long = "log-target", value_parser = logging::parse_target_directive)]
    log_targets: Vec<(String, String)>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_with_config(&LoggingConfig {
        default: cli.log_level.clone(),
        targets: cli.log_targets.clone(),
    });

    let mut calc = CalculatorBuilder::new()
        .tape_capacity(cli.tape_capacity)
        .track_transitions(cli.history)
        .build();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.keys {
        Some(keys) => press_line(&mut calc, keys, cli.json, &mut out)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read key labels from stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                press_line(&mut calc, &line, cli.json, &mut out)?;
            }
        }
    }

    if cli.tape {
        writeln!(out, "-- tape --")?;
        for entry in calc.tape().entries() {
            writeln!(out, "{entry}")?;
        }
    }

    if let Some(history) = calc.history() {
        writeln!(out, "-- history --")?;
        for transition in history.transitions() {
            writeln!(
                out,
                "{} -> {} ({})",
                transition.from.name(),
                transition.to.name(),
                transition.trigger
            )?;
        }
    }

    Ok(())
}

/// Press every recognised key on `line`, then print the display once.
fn press_line(calc: &mut Calculator, line: &str, json: bool, out: &mut impl Write) -> Result<()> {
    for word in line.split_whitespace() {
        match Token::parse_sequence(word) {
            Ok(tokens) => {
                calc.apply_all(tokens);
            }
            Err(err) => {
                let err = anyhow::Error::from(err).context(format!("skipping key label '{word}'"));
                warn!("{err:#}");
            }
        }
    }

    let display = calc.display();
    if json {
        let encoded = serde_json::to_string(&display).context("failed to encode display")?;
        writeln!(out, "{encoded}")?;
    } else {
        writeln!(out, "{display}")?;
    }
    Ok(())
}
