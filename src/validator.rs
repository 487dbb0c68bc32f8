//! Constraint validators and the allow-list membership predicate
//!
//! A validator is instantiated by the host, initialized exactly once with a
//! declaration, and then asked for verdicts. Verdicts are pure: the same
//! candidate against the same initialized validator always yields the same
//! boolean, with no side effects and no state carried between calls.
//!
//! # Examples
//!
//! ```
//! use allowset::{AllowList, AllowListValidator, Candidate, ConstraintValidator};
//!
//! let constraint = AllowList::new(["RED", "GREEN", "BLUE"]);
//!
//! let mut validator = AllowListValidator::default();
//! validator.initialize(&constraint);
//!
//! let mut ctx = validator.context();
//! assert!(validator.is_valid(&Candidate::from("RED"), &mut ctx));
//! assert!(!validator.is_valid(&Candidate::from("PURPLE"), &mut ctx));
//! assert!(validator.is_valid(&Candidate::Absent, &mut ctx));
//! ```
//!
//! ## Accumulating violations across fields
//!
//! ```
//! use allowset::{AllowList, AllowListValidator, Candidate, ConstraintValidator};
//!
//! let mut colors = AllowListValidator::default();
//! colors.initialize(&AllowList::new(["RED", "BLUE"]).with_message("unknown color"));
//!
//! let mut sizes = AllowListValidator::default();
//! sizes.initialize(&AllowList::new(["S", "M", "L"]).with_message("unknown size"));
//!
//! let result = colors
//!     .check_field(&Candidate::from("MAGENTA"), "color")
//!     .and(sizes.check_field(&Candidate::from("XL"), "size"));
//!
//! let errors = result.into_result().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].to_string(), "color: unknown color");
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::candidate::Candidate;
use crate::constraint::{AllowList, DEFAULT_MESSAGE};
use crate::validation::Validation;

/// The lifecycle contract a host framework programs against.
///
/// The host discovers a declaration on a field, creates one validator
/// instance for it, calls [`initialize`](ConstraintValidator::initialize)
/// once, and then calls [`is_valid`](ConstraintValidator::is_valid) for
/// every value-check occurrence on that field.
pub trait ConstraintValidator {
    /// The declaration type this validator consumes.
    type Constraint;

    /// Consume the declaration. Called exactly once per field-constraint
    /// usage, before any verdict on this instance.
    fn initialize(&mut self, constraint: &Self::Constraint);

    /// Produce a verdict for one candidate value.
    ///
    /// The context lets an implementation replace the declaration's
    /// failure message for this occurrence.
    fn is_valid(&self, candidate: &Candidate, ctx: &mut ConstraintContext) -> bool;
}

/// Per-occurrence context passed to [`ConstraintValidator::is_valid`].
///
/// Carries the declaration's message template; a validator may override it
/// for one occurrence via [`set_message`](ConstraintContext::set_message).
/// The host turns the effective message into a [`Violation`] when the
/// verdict is false.
#[derive(Debug, Clone)]
pub struct ConstraintContext {
    template: String,
    override_message: Option<String>,
}

impl ConstraintContext {
    /// Create a context carrying the declaration's message template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            override_message: None,
        }
    }

    /// Replace the message for this occurrence only.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::ConstraintContext;
    ///
    /// let mut ctx = ConstraintContext::new("Invalid value");
    /// ctx.set_message("PURPLE is not a known color");
    /// assert_eq!(ctx.message(), "PURPLE is not a known color");
    /// ```
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.override_message = Some(message.into());
    }

    /// The effective failure message: the override if one was set,
    /// otherwise the declaration's template.
    pub fn message(&self) -> &str {
        self.override_message.as_deref().unwrap_or(&self.template)
    }

    /// Render the effective message into a violation for `field`.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::ConstraintContext;
    ///
    /// let ctx = ConstraintContext::new("unknown color");
    /// let violation = ctx.violation("color");
    /// assert_eq!(violation.to_string(), "color: unknown color");
    /// ```
    pub fn violation(&self, field: &'static str) -> Violation {
        Violation {
            field,
            message: self.message().to_string(),
        }
    }
}

/// A failed verdict with field context.
///
/// # Examples
///
/// ```
/// use allowset::Violation;
///
/// let violation = Violation {
///     field: "color",
///     message: "unknown color".to_string(),
/// };
/// assert_eq!(violation.to_string(), "color: unknown color");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The field the constraint was declared on.
    pub field: &'static str,
    /// The effective failure message.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for Violation {}

/// Validates that a field's value is a subset of a declared allow-list.
///
/// The allowed values live in a `HashSet` built once by `initialize`;
/// duplicates in the declaration collapse silently and an empty list is
/// accepted. The set is never mutated afterwards, so a host that shares an
/// instance across concurrent read-only validations is safe.
///
/// An instance that was never initialized holds an empty set: present
/// values are rejected rather than anything crashing.
///
/// # Verdicts
///
/// * [`Candidate::Absent`] - valid. Required-ness is another constraint's
///   concern.
/// * [`Candidate::Scalar`] - valid iff the string is in the allow-list.
/// * [`Candidate::Sequence`] - valid iff every element is in the
///   allow-list; the empty sequence is vacuously valid.
/// * [`Candidate::Unsupported`] - invalid, unconditionally.
///
/// # Examples
///
/// ```
/// use allowset::{AllowList, AllowListValidator, Candidate, ConstraintValidator};
///
/// let mut validator = AllowListValidator::default();
/// validator.initialize(&AllowList::new(["RED", "GREEN", "BLUE"]));
///
/// let mut ctx = validator.context();
/// assert!(validator.is_valid(&Candidate::from(vec!["RED", "BLUE"]), &mut ctx));
/// assert!(!validator.is_valid(&Candidate::from(vec!["RED", "PURPLE"]), &mut ctx));
/// assert!(validator.is_valid(&Candidate::Sequence(vec![]), &mut ctx));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllowListValidator {
    allowed: HashSet<String>,
    message: String,
}

impl AllowListValidator {
    /// Create an initialized validator directly from a declaration.
    ///
    /// Equivalent to `default()` followed by `initialize`, for hosts that
    /// don't split construction from configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::{AllowList, AllowListValidator, Candidate};
    ///
    /// let validator = AllowListValidator::new(&AllowList::new(["A", "B"]));
    /// assert!(validator.check(&Candidate::from("A")).is_success());
    /// ```
    pub fn new(constraint: &AllowList) -> Self {
        let mut validator = Self::default();
        validator.initialize(constraint);
        validator
    }

    /// A fresh per-occurrence context carrying this validator's message.
    pub fn context(&self) -> ConstraintContext {
        if self.message.is_empty() {
            ConstraintContext::new(DEFAULT_MESSAGE)
        } else {
            ConstraintContext::new(self.message.as_str())
        }
    }

    /// Number of distinct allowed values.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Whether the allow-list is empty (an uninitialized validator is).
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Verdict as a [`Validation`], accumulating the failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::{AllowList, AllowListValidator, Candidate};
    ///
    /// let validator = AllowListValidator::new(
    ///     &AllowList::new(["RED"]).with_message("unknown color"),
    /// );
    ///
    /// let result = validator.check(&Candidate::from("PURPLE"));
    /// assert_eq!(result.into_result(), Err(vec!["unknown color".to_string()]));
    /// ```
    pub fn check(&self, candidate: &Candidate) -> Validation<(), Vec<String>> {
        let mut ctx = self.context();
        if self.is_valid(candidate, &mut ctx) {
            Validation::success(())
        } else {
            Validation::failure(vec![ctx.message().to_string()])
        }
    }

    /// Verdict as a [`Validation`] carrying field context, for hosts that
    /// validate several fields and report everything at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::{AllowList, AllowListValidator, Candidate};
    ///
    /// let validator = AllowListValidator::new(&AllowList::new(["RED"]));
    /// let result = validator.check_field(&Candidate::from("PURPLE"), "color");
    ///
    /// let violations = result.into_result().unwrap_err();
    /// assert_eq!(violations[0].field, "color");
    /// ```
    pub fn check_field(
        &self,
        candidate: &Candidate,
        field: &'static str,
    ) -> Validation<(), Vec<Violation>> {
        let mut ctx = self.context();
        if self.is_valid(candidate, &mut ctx) {
            Validation::success(())
        } else {
            Validation::failure(vec![ctx.violation(field)])
        }
    }
}

impl ConstraintValidator for AllowListValidator {
    type Constraint = AllowList;

    fn initialize(&mut self, constraint: &AllowList) {
        self.allowed = constraint.list().iter().cloned().collect();
        self.message = constraint.message().to_string();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            allowed = self.allowed.len(),
            "allow-list validator initialized"
        );
    }

    fn is_valid(&self, candidate: &Candidate, _ctx: &mut ConstraintContext) -> bool {
        let verdict = match candidate {
            Candidate::Absent => true,
            Candidate::Scalar(value) => self.allowed.contains(value.as_str()),
            Candidate::Sequence(items) => {
                items.iter().all(|item| self.allowed.contains(item.as_str()))
            }
            Candidate::Unsupported => false,
        };

        #[cfg(feature = "tracing")]
        if !verdict {
            tracing::trace!(?candidate, "candidate rejected");
        }

        verdict
    }
}
