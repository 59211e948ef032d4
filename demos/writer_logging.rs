//! Writer example demonstrating logs, counters and audit trails accumulated alongside
//! computation.
//!
//! Run with: cargo run --example writer_logging

use scrivener::monoid::Sum;
use scrivener::prelude::*;
use scrivener::writer_flavor;

// ============================================================================
// Example 1: String log
// ============================================================================

fn double(x: i32) -> Writer<i32> {
    Writer::new(x * 2, "doubled;".to_string())
}

fn increment(x: i32) -> Writer<i32> {
    Writer::new(x + 1, "inc;".to_string())
}

fn string_log() {
    println!("\n=== Example 1: String log ===");

    let w = Writer::new(3, "start;".to_string())
        .bind(double)
        .bind(increment);

    println!("{}", w);
}

// ============================================================================
// Example 2: Counting steps with the Sum monoid
// ============================================================================

writer_flavor!(StepCounter = Sum<u32>);

fn collatz_step(n: u64) -> StepCounter<u64> {
    let next = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
    Writer::new(next, Sum(1))
}

fn collatz(n: u64) -> StepCounter<u64> {
    if n <= 1 {
        Writer::unit(n)
    } else {
        collatz_step(n).bind(collatz)
    }
}

fn step_counting() {
    println!("\n=== Example 2: Counting steps ===");

    for start in [6, 7, 27] {
        let (_, steps) = collatz(start).run();
        println!("collatz({}) reached 1 in {} steps", start, steps);
    }
}

// ============================================================================
// Example 3: Audit trail with custom events
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
enum AuditEvent {
    Validated { field: &'static str },
    Normalized { from: String, to: String },
}

fn validate(email: String) -> VecWriter<String, AuditEvent> {
    Writer::new(email, vec![AuditEvent::Validated { field: "email" }])
}

fn normalize(email: String) -> VecWriter<String, AuditEvent> {
    let lower = email.to_lowercase();
    let event = AuditEvent::Normalized {
        from: email,
        to: lower.clone(),
    };
    Writer::new(lower, vec![event])
}

fn audit_trail() {
    println!("\n=== Example 3: Audit trail ===");

    let (email, events) = Writer::unit("Ada@Example.COM".to_string())
        .bind(validate)
        .bind(normalize)
        .run();

    println!("result: {}", email);
    for event in events {
        println!("  {:?}", event);
    }
}

// ============================================================================
// Example 4: Log-only writers and censoring
// ============================================================================

fn tell_and_censor() {
    println!("\n=== Example 4: tell and censor ===");

    let w = tell(vec!["debug: cache miss".to_string()])
        .then(tell(vec!["info: user loaded".to_string()]))
        .map(|_| 42)
        .censor(|logs| {
            logs.into_iter()
                .filter(|l| !l.starts_with("debug"))
                .collect()
        });

    let (value, logs) = w.run();
    println!("value: {}, logs: {:?}", value, logs);
}

fn main() {
    println!("Writer Examples");
    println!("===============");

    string_log();
    step_counting();
    audit_trail();
    tell_and_censor();

    println!("\n=== All examples completed successfully! ===");
}
