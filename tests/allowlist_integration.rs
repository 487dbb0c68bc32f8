//! Integration tests driving the validator the way a host framework would:
//! one declaration per field, initialize once, verdicts per occurrence,
//! violations accumulated across fields.

use allowset::{
    assert_failure, assert_success, AllowList, AllowListValidator, Candidate, ConstraintValidator,
    Group, Validation, Violation,
};

/// A field declaration as a host framework would hold it after discovery.
struct FieldConstraint {
    field: &'static str,
    validator: AllowListValidator,
    constraint: AllowList,
}

impl FieldConstraint {
    fn new(field: &'static str, constraint: AllowList) -> Self {
        // The host instantiates the validator and initializes it exactly
        // once per field-constraint usage.
        let mut validator = AllowListValidator::default();
        validator.initialize(&constraint);
        Self {
            field,
            validator,
            constraint,
        }
    }

    fn check(&self, candidate: &Candidate) -> Validation<(), Vec<Violation>> {
        self.validator.check_field(candidate, self.field)
    }
}

/// Incoming request payload with three constrained fields.
struct UpdateItemRequest {
    color: Option<String>,
    tags: Vec<String>,
    status: Option<String>,
}

fn item_constraints() -> Vec<FieldConstraint> {
    vec![
        FieldConstraint::new(
            "color",
            AllowList::new(["RED", "GREEN", "BLUE"]).with_message("unknown color"),
        ),
        FieldConstraint::new(
            "tags",
            AllowList::new(["new", "sale", "featured"]).with_message("unknown tag"),
        ),
        FieldConstraint::new(
            "status",
            AllowList::new(["DRAFT", "PUBLISHED"]).with_message("unknown status"),
        ),
    ]
}

fn validate_request(request: &UpdateItemRequest) -> Validation<(), Vec<Violation>> {
    let constraints = item_constraints();
    let candidates = [
        Candidate::from(request.color.clone()),
        Candidate::from(request.tags.clone()),
        Candidate::from(request.status.clone()),
    ];

    constraints
        .iter()
        .zip(&candidates)
        .map(|(fc, candidate)| fc.check(candidate))
        .fold(Validation::success(()), |acc, v| acc.and(v).map(|_| ()))
}

#[test]
fn test_valid_request_passes() {
    let request = UpdateItemRequest {
        color: Some("RED".to_string()),
        tags: vec!["new".to_string(), "sale".to_string()],
        status: Some("DRAFT".to_string()),
    };
    assert_success!(validate_request(&request));
}

#[test]
fn test_absent_fields_pass() {
    let request = UpdateItemRequest {
        color: None,
        tags: vec![],
        status: None,
    };
    assert_success!(validate_request(&request));
}

#[test]
fn test_all_violations_reported_at_once() {
    let request = UpdateItemRequest {
        color: Some("MAGENTA".to_string()),
        tags: vec!["new".to_string(), "clearance".to_string()],
        status: Some("ARCHIVED".to_string()),
    };

    let violations = validate_request(&request).into_result().unwrap_err();
    assert_eq!(violations.len(), 3);
    assert_eq!(violations[0].to_string(), "color: unknown color");
    assert_eq!(violations[1].to_string(), "tags: unknown tag");
    assert_eq!(violations[2].to_string(), "status: unknown status");
}

#[test]
fn test_single_bad_field_reports_only_that_field() {
    let request = UpdateItemRequest {
        color: Some("GREEN".to_string()),
        tags: vec!["clearance".to_string()],
        status: None,
    };

    let violations = validate_request(&request).into_result().unwrap_err();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "tags");
}

// Concrete verdict table for the allow-list {RED, GREEN, BLUE}.
mod color_table {
    use super::*;

    fn validator() -> AllowListValidator {
        AllowListValidator::new(&AllowList::new(["RED", "GREEN", "BLUE"]))
    }

    #[test]
    fn scenario_member_scalar() {
        assert_success!(validator().check(&Candidate::from("RED")));
    }

    #[test]
    fn scenario_non_member_scalar() {
        assert_failure!(validator().check(&Candidate::from("PURPLE")));
    }

    #[test]
    fn scenario_absent() {
        assert_success!(validator().check(&Candidate::Absent));
    }

    #[test]
    fn scenario_member_sequence() {
        assert_success!(validator().check(&Candidate::from(vec!["RED", "BLUE"])));
    }

    #[test]
    fn scenario_sequence_with_outsider() {
        assert_failure!(validator().check(&Candidate::from(vec!["RED", "PURPLE"])));
    }

    #[test]
    fn scenario_empty_sequence() {
        assert_success!(validator().check(&Candidate::Sequence(vec![])));
    }

    #[test]
    fn scenario_non_string_shape() {
        assert_failure!(validator().check(&Candidate::Unsupported));
    }
}

mod groups {
    use super::*;

    const ON_CREATE: Group = Group::new("on_create");
    const ON_UPDATE: Group = Group::new("on_update");

    /// Validate one field under an active group, skipping constraints that
    /// don't apply - the host-side group filter.
    fn check_under_group(
        fc: &FieldConstraint,
        candidate: &Candidate,
        active: &Group,
    ) -> Validation<(), Vec<Violation>> {
        if fc.constraint.applies_to(active) {
            fc.check(candidate)
        } else {
            Validation::success(())
        }
    }

    #[test]
    fn test_grouped_constraint_skipped_outside_its_group() {
        let fc = FieldConstraint::new(
            "status",
            AllowList::new(["DRAFT"]).with_groups([ON_CREATE]),
        );
        let bad = Candidate::from("PUBLISHED");

        // Active group doesn't match: constraint doesn't participate.
        assert_success!(check_under_group(&fc, &bad, &ON_UPDATE));
        assert_success!(check_under_group(&fc, &bad, &Group::DEFAULT));

        // Active group matches: verdict applies.
        assert_failure!(check_under_group(&fc, &bad, &ON_CREATE));
    }

    #[test]
    fn test_ungrouped_constraint_runs_in_default_group_only() {
        let fc = FieldConstraint::new("color", AllowList::new(["RED"]));
        let bad = Candidate::from("PURPLE");

        assert_failure!(check_under_group(&fc, &bad, &Group::DEFAULT));
        assert_success!(check_under_group(&fc, &bad, &ON_CREATE));
    }
}

#[cfg(feature = "serde")]
mod json_boundary {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verdicts_over_untyped_json() {
        let validator = AllowListValidator::new(&AllowList::new(["RED", "GREEN", "BLUE"]));

        let cases = [
            (json!("RED"), true),
            (json!("PURPLE"), false),
            (json!(null), true),
            (json!(["RED", "BLUE"]), true),
            (json!(["RED", "PURPLE"]), false),
            (json!([]), true),
            (json!(42), false),
        ];

        for (value, expected) in &cases {
            let candidate = Candidate::from_json(value);
            assert_eq!(
                validator.check(&candidate).is_success(),
                *expected,
                "verdict mismatch for {value}",
            );
        }
    }

    #[test]
    fn test_constraint_loaded_from_config() {
        let config = r#"
            {
                "list": ["EUR", "USD", "GBP"],
                "message": "unsupported currency"
            }
        "#;
        let constraint: AllowList = serde_json::from_str(config).unwrap();
        let validator = AllowListValidator::new(&constraint);

        assert_success!(validator.check(&Candidate::from("EUR")));

        let result = validator.check(&Candidate::from("JPY"));
        assert_eq!(
            result.into_result(),
            Err(vec!["unsupported currency".to_string()]),
        );
    }

    #[test]
    fn test_mixed_json_array_rejected_not_coerced() {
        let validator = AllowListValidator::new(&AllowList::new(["1", "2"]));

        // Numeric elements are not coerced to their string spellings.
        let candidate = Candidate::from_json(&json!([1, 2]));
        assert_eq!(candidate, Candidate::Unsupported);
        assert_failure!(validator.check(&candidate));
    }
}
