//! Demonstrates tracing integration with writers
//!
//! Run with: cargo run --example tracing_demo --features tracing

use scrivener::writer::WriterTracingExt;
use scrivener::Writer;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let result = Writer::new(3, "start;".to_string())
        .traced("loaded")
        .bind_traced("double", |x| Writer::new(x * 2, "doubled;".to_string()))
        .bind_traced("increment", |x| Writer::new(x + 1, "inc;".to_string()))
        .traced("finished");

    tracing::info!("Pipeline result: {}", result);
}
