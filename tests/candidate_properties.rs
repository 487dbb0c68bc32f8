//! Property-based tests for the allow-list verdict algebra

use allowset::{AllowList, AllowListValidator, Candidate};
use proptest::prelude::*;

fn allow_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z]{1,8}", 1..10)
}

fn validator_for(list: &[String]) -> AllowListValidator {
    AllowListValidator::new(&AllowList::new(list.iter().cloned()))
}

proptest! {
    #[test]
    fn prop_member_scalar_always_valid(
        list in allow_list(),
        index in any::<prop::sample::Index>(),
    ) {
        let validator = validator_for(&list);
        let member = index.get(&list).clone();

        prop_assert!(validator.check(&Candidate::Scalar(member)).is_success());
    }

    #[test]
    fn prop_non_member_scalar_always_invalid(
        list in allow_list(),
        value in "[a-zA-Z]{1,8}",
    ) {
        prop_assume!(!list.contains(&value));
        let validator = validator_for(&list);

        prop_assert!(validator.check(&Candidate::Scalar(value)).is_failure());
    }

    #[test]
    fn prop_absent_always_valid(list in allow_list()) {
        let validator = validator_for(&list);

        prop_assert!(validator.check(&Candidate::Absent).is_success());
    }

    #[test]
    fn prop_subset_sequence_always_valid(
        list in allow_list(),
        indices in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let validator = validator_for(&list);
        let subset: Vec<String> = indices.iter().map(|i| i.get(&list).clone()).collect();

        // Includes the empty sequence when indices is empty.
        prop_assert!(validator.check(&Candidate::Sequence(subset)).is_success());
    }

    #[test]
    fn prop_sequence_with_outsider_always_invalid(
        list in allow_list(),
        indices in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
        outsider in "[a-zA-Z]{1,8}",
        position in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!list.contains(&outsider));
        let validator = validator_for(&list);

        let mut sequence: Vec<String> = indices.iter().map(|i| i.get(&list).clone()).collect();
        let at = position.index(sequence.len() + 1);
        sequence.insert(at, outsider);

        prop_assert!(validator.check(&Candidate::Sequence(sequence)).is_failure());
    }

    #[test]
    fn prop_unsupported_always_invalid(list in allow_list()) {
        let validator = validator_for(&list);

        prop_assert!(validator.check(&Candidate::Unsupported).is_failure());
    }

    #[test]
    fn prop_verdict_independent_of_sequence_order(
        list in allow_list(),
        values in prop::collection::vec("[a-zA-Z]{1,8}", 0..12),
    ) {
        let validator = validator_for(&list);

        let forward = validator.check(&Candidate::Sequence(values.clone())).is_success();
        let mut reversed = values;
        reversed.reverse();
        let backward = validator.check(&Candidate::Sequence(reversed)).is_success();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_duplicate_declarations_change_nothing(
        list in allow_list(),
        value in "[a-zA-Z]{1,8}",
    ) {
        let validator = validator_for(&list);

        let mut doubled = list.clone();
        doubled.extend(list.clone());
        let doubled_validator = validator_for(&doubled);

        let candidate = Candidate::Scalar(value);
        prop_assert_eq!(
            validator.check(&candidate).is_success(),
            doubled_validator.check(&candidate).is_success(),
        );
    }

    #[test]
    fn prop_verdict_is_deterministic(
        list in allow_list(),
        values in prop::collection::vec("[a-zA-Z]{1,8}", 0..8),
    ) {
        let validator = validator_for(&list);
        let candidate = Candidate::Sequence(values);

        let first = validator.check(&candidate).is_success();
        let second = validator.check(&candidate).is_success();
        prop_assert_eq!(first, second);
    }
}
