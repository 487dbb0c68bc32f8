//! Demonstrates the diagnostics emitted when the tracing feature is on
//!
//! Run with: cargo run --example tracing_demo --features tracing

use allowset::{AllowList, AllowListValidator, Candidate};

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting allow-list demo");

    // initialize emits the resulting set size at debug level
    let validator = AllowListValidator::new(
        &AllowList::new(["RED", "GREEN", "BLUE"]).with_message("unknown color"),
    );

    // Accepted candidates stay quiet; rejections emit a trace event
    // naming the candidate.
    let candidates = [
        Candidate::from("RED"),
        Candidate::from("PURPLE"),
        Candidate::Absent,
        Candidate::from(vec!["RED", "PURPLE"]),
        Candidate::Unsupported,
    ];

    for candidate in &candidates {
        let verdict = validator.check(candidate);
        tracing::info!(?candidate, valid = verdict.is_success(), "verdict");
    }

    tracing::info!("Done");
}
