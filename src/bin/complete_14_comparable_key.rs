use std::collections::BTreeSet;
use std::path::PathBuf;

use colored::Colorize;
use effective_idioms::{telemetry, IdiomsConfig, KeyError, PhoneNumber};
use tracing::info;

const SAMPLE_NUMBERS: [&str; 5] = [
    "707-867-5309",
    "212-555-1234",
    "707-867-5309",
    "707-867-5310",
    "1000-867-5309",
];

/// A `.toml` argument is the config file; everything else is a phone number.
fn split_args(args: impl IntoIterator<Item = String>) -> (Option<PathBuf>, Vec<String>) {
    let mut config = None;
    let mut numbers = Vec::new();
    for arg in args {
        if arg.ends_with(".toml") {
            config = Some(PathBuf::from(arg));
        } else {
            numbers.push(arg);
        }
    }
    (config, numbers)
}

// =============================================================================
// Milestone 1: Validated construction
// =============================================================================

fn parse_all<'a>(
    inputs: impl IntoIterator<Item = &'a str>,
) -> (Vec<PhoneNumber>, Vec<(&'a str, KeyError)>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();
    for input in inputs {
        match input.parse::<PhoneNumber>() {
            Ok(number) => valid.push(number),
            Err(err) => rejected.push((input, err)),
        }
    }
    (valid, rejected)
}

// =============================================================================
// Milestone 2: Equality + ordering
// =============================================================================

/// Distinct numbers in ascending order.
fn distinct_sorted(numbers: &[PhoneNumber]) -> Vec<PhoneNumber> {
    numbers.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config_path, args) = split_args(std::env::args().skip(1));
    let config = IdiomsConfig::load_or_default(config_path.as_deref())?;
    telemetry::init(&config.logging)?;

    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLE_NUMBERS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    info!(count = inputs.len(), "comparable key walkthrough");

    println!("{}", "=== Milestone 1: Validation ===".bold());
    let (valid, rejected) = parse_all(inputs);
    for number in &valid {
        println!("  {} {}", "ok".green(), number);
    }
    for (input, err) in &rejected {
        println!("  {} {} ({})", "rejected".red(), input, err);
    }

    println!("\n{}", "=== Milestone 2: Equality, hashing, ordering ===".bold());
    for pair in valid.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        println!(
            "  {} vs {}: equal={} hash=({}, {}) order={:?}",
            a,
            b,
            a == b,
            a.hash_code(),
            b.hash_code(),
            a.cmp(b)
        );
    }

    let sorted = distinct_sorted(&valid);
    println!("  sorted distinct: {}", serde_json::to_string(&sorted)?.cyan());

    Ok(())
}
