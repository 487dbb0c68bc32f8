//! Field validation walkthrough - one allow-list constraint per field,
//! every violation reported at once.
//!
//! Run with: cargo run --example field_validation

use allowset::{AllowList, AllowListValidator, Candidate, Validation, Violation};

// Raw input as a host framework would extract it from a request
struct UpdateItemForm {
    color: Option<String>,
    tags: Vec<String>,
    status: Option<String>,
}

struct ItemValidators {
    color: AllowListValidator,
    tags: AllowListValidator,
    status: AllowListValidator,
}

impl ItemValidators {
    fn new() -> Self {
        Self {
            color: AllowListValidator::new(
                &AllowList::new(["RED", "GREEN", "BLUE"])
                    .with_message("color must be RED, GREEN or BLUE"),
            ),
            tags: AllowListValidator::new(
                &AllowList::new(["new", "sale", "featured"]).with_message("unknown tag"),
            ),
            status: AllowListValidator::new(
                &AllowList::new(["DRAFT", "PUBLISHED"]).with_message("unknown status"),
            ),
        }
    }

    fn validate(&self, form: &UpdateItemForm) -> Validation<(), Vec<Violation>> {
        self.color
            .check_field(&Candidate::from(form.color.clone()), "color")
            .and(self.tags.check_field(&Candidate::from(form.tags.clone()), "tags"))
            .and(
                self.status
                    .check_field(&Candidate::from(form.status.clone()), "status"),
            )
            .map(|_| ())
    }
}

fn report(label: &str, result: Validation<(), Vec<Violation>>) {
    match result {
        Validation::Success(_) => println!("{}: ✓ valid", label),
        Validation::Failure(violations) => {
            println!("{}: ✗ {} violation(s)", label, violations.len());
            for violation in violations {
                println!("  - {}", violation);
            }
        }
    }
}

fn main() {
    println!("=== Allow-list Field Validation ===\n");

    let validators = ItemValidators::new();

    report(
        "Test 1: all fields allowed",
        validators.validate(&UpdateItemForm {
            color: Some("RED".to_string()),
            tags: vec!["new".to_string(), "sale".to_string()],
            status: Some("DRAFT".to_string()),
        }),
    );

    report(
        "Test 2: absent fields pass",
        validators.validate(&UpdateItemForm {
            color: None,
            tags: vec![],
            status: None,
        }),
    );

    report(
        "Test 3: every violation reported",
        validators.validate(&UpdateItemForm {
            color: Some("MAGENTA".to_string()),
            tags: vec!["new".to_string(), "clearance".to_string()],
            status: Some("ARCHIVED".to_string()),
        }),
    );
}

/* Expected output:

=== Allow-list Field Validation ===

Test 1: all fields allowed: ✓ valid
Test 2: absent fields pass: ✓ valid
Test 3: every violation reported: ✗ 3 violation(s)
  - color: color must be RED, GREEN or BLUE
  - tags: unknown tag
  - status: unknown status

*/
