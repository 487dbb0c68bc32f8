//! # Allowset
//!
//! Declarative allow-list constraints for string fields.
//!
//! ## Philosophy
//!
//! A constraint is data, a validator is a pure predicate. The
//! [`AllowList`] declaration says which values a field may hold; the
//! [`AllowListValidator`] is initialized once from that declaration and
//! then answers, without side effects, whether a candidate value is a
//! subset of the allow-list. Everything around that - discovering
//! declarations on fields, deciding when to validate, turning verdicts
//! into HTTP responses - belongs to the host framework.
//!
//! ## Quick Example
//!
//! ```rust
//! use allowset::{AllowList, AllowListValidator, Candidate, ConstraintValidator};
//!
//! // Declare the constraint
//! let constraint = AllowList::new(["RED", "GREEN", "BLUE"])
//!     .with_message("color must be RED, GREEN or BLUE");
//!
//! // The host initializes one validator per constrained field
//! let mut validator = AllowListValidator::default();
//! validator.initialize(&constraint);
//!
//! // ...and asks for verdicts as values arrive
//! let mut ctx = validator.context();
//! assert!(validator.is_valid(&Candidate::from("RED"), &mut ctx));
//! assert!(validator.is_valid(&Candidate::Absent, &mut ctx));
//! assert!(!validator.is_valid(&Candidate::from(vec!["RED", "PURPLE"]), &mut ctx));
//! ```
//!
//! ## Reporting all violations at once
//!
//! ```rust
//! use allowset::{AllowList, AllowListValidator, Candidate};
//!
//! let colors = AllowListValidator::new(
//!     &AllowList::new(["RED", "BLUE"]).with_message("unknown color"),
//! );
//! let sizes = AllowListValidator::new(
//!     &AllowList::new(["S", "M", "L"]).with_message("unknown size"),
//! );
//!
//! let report = colors
//!     .check_field(&Candidate::from("MAGENTA"), "color")
//!     .and(sizes.check_field(&Candidate::from("XL"), "size"));
//!
//! let violations = report.into_result().unwrap_err();
//! assert_eq!(violations.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod candidate;
pub mod constraint;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use candidate::Candidate;
pub use constraint::{AllowList, Group, Payload};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{AllowListValidator, ConstraintContext, ConstraintValidator, Violation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::candidate::Candidate;
    pub use crate::constraint::{AllowList, Group, Payload};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::{
        AllowListValidator, ConstraintContext, ConstraintValidator, Violation,
    };
}
