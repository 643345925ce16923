use std::path::PathBuf;
use std::rc::Rc;

use colored::Colorize;
use effective_idioms::{telemetry, EmptyStackError, IdiomsConfig, Stack, StackSettings};
use tracing::info;

// =============================================================================
// Milestone 1: LIFO order and the empty-stack error
// =============================================================================

/// Pushes `values` and pops until the stack reports it is empty.
fn drain_in_pop_order(settings: &StackSettings, values: &[i32]) -> (Vec<i32>, EmptyStackError) {
    let mut stack = Stack::from_settings(settings);
    for value in values {
        stack.push(*value);
    }

    let mut popped = Vec::with_capacity(values.len());
    loop {
        match stack.pop() {
            Ok(value) => popped.push(value),
            Err(empty) => return (popped, empty),
        }
    }
}

// =============================================================================
// Milestone 2: Buffer growth
// =============================================================================

/// Capacity after each reallocation while pushing `pushes` elements.
fn growth_steps(settings: &StackSettings, pushes: usize) -> Vec<usize> {
    let mut stack = Stack::from_settings(settings);
    let mut steps = vec![stack.capacity()];
    for i in 0..pushes {
        stack.push(i);
        if stack.capacity() != *steps.last().unwrap_or(&0) {
            steps.push(stack.capacity());
        }
    }
    steps
}

// =============================================================================
// Milestone 3: Popped values are not retained
// =============================================================================

/// Strong count of a shared value after it was pushed, popped and dropped.
fn strong_count_after_pop() -> usize {
    let shared = Rc::new("payload".to_string());
    let mut stack = Stack::new();
    stack.push(Rc::clone(&shared));
    drop(stack.pop());
    Rc::strong_count(&shared)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = IdiomsConfig::load_or_default(config_path.as_deref())?;
    telemetry::init(&config.logging)?;
    info!(initial_capacity = config.stack.initial_capacity, "stack walkthrough");

    println!("{}", "=== Milestone 1: LIFO ===".bold());
    let (popped, empty) = drain_in_pop_order(&config.stack, &[1, 2, 3]);
    println!("pushed [1, 2, 3], popped {:?}", popped);
    println!("next pop: {}", empty.to_string().red());

    println!("\n{}", "=== Milestone 2: Growth (2n + 1) ===".bold());
    let steps = growth_steps(&config.stack, 100);
    let rendered: Vec<String> = steps.iter().map(ToString::to_string).collect();
    println!("capacities: {}", rendered.join(" -> ").cyan());

    println!("\n{}", "=== Milestone 3: Obsolete references ===".bold());
    let count = strong_count_after_pop();
    println!(
        "strong count after pop: {}",
        if count == 1 {
            count.to_string().green()
        } else {
            count.to_string().red()
        }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_reverses() {
        let (popped, empty) = drain_in_pop_order(&StackSettings::default(), &[1, 2, 3]);
        assert_eq!(popped, vec![3, 2, 1]);
        assert_eq!(empty, EmptyStackError);
    }

    #[test]
    fn test_growth_steps_from_default() {
        let steps = growth_steps(&StackSettings::default(), 100);
        assert_eq!(steps, vec![16, 33, 67, 135]);
    }

    #[test]
    fn test_growth_steps_from_zero() {
        let settings = StackSettings {
            initial_capacity: 0,
        };
        assert_eq!(growth_steps(&settings, 10), vec![0, 1, 3, 7, 15]);
    }

    #[test]
    fn test_nothing_retained() {
        assert_eq!(strong_count_after_pop(), 1);
    }
}
