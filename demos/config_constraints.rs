//! Constraints loaded from configuration, candidates classified from
//! untyped JSON.
//!
//! Run with: cargo run --example config_constraints --features serde

use allowset::{AllowList, AllowListValidator, Candidate};
use serde_json::json;

fn main() {
    println!("=== Config-driven Constraints ===\n");

    // Declarations can live in config files alongside the rest of an
    // application's settings.
    let config = r#"
        {
            "list": ["RED", "GREEN", "BLUE"],
            "message": "unknown color"
        }
    "#;
    let constraint: AllowList = serde_json::from_str(config).expect("valid constraint config");
    println!("loaded allow-list: {:?}", constraint.list());

    let validator = AllowListValidator::new(&constraint);

    // Whatever shape arrives in the payload, the boundary classifies it
    // once and the validator matches over the closed variant.
    let payloads = [
        json!("RED"),
        json!("PURPLE"),
        json!(null),
        json!(["RED", "BLUE"]),
        json!(["RED", "PURPLE"]),
        json!([]),
        json!(42),
        json!({"color": "RED"}),
    ];

    for payload in &payloads {
        let candidate = Candidate::from_json(payload);
        let verdict = validator.check(&candidate);
        println!(
            "{:<20} -> {:?} -> {}",
            payload.to_string(),
            candidate,
            if verdict.is_success() { "valid" } else { "invalid" },
        );
    }
}
