//! Allow-list constraint declarations
//!
//! A constraint declaration is pure data - it describes which values a field
//! may hold but doesn't check anything itself. Declarations are built once,
//! handed to a validator's `initialize`, and never mutated afterwards. This
//! makes them easy to test, clone, and inspect.
//!
//! # Examples
//!
//! ```
//! use allowset::AllowList;
//!
//! let constraint = AllowList::new(["RED", "GREEN", "BLUE"])
//!     .with_message("color must be RED, GREEN or BLUE");
//!
//! assert_eq!(constraint.list(), ["RED", "GREEN", "BLUE"]);
//! assert_eq!(constraint.message(), "color must be RED, GREEN or BLUE");
//! ```
//!
//! ## Validation groups
//!
//! ```
//! use allowset::{AllowList, Group};
//!
//! const ON_CREATE: Group = Group::new("on_create");
//!
//! let constraint = AllowList::new(["DRAFT", "PUBLISHED"]).with_groups([ON_CREATE]);
//!
//! assert!(constraint.applies_to(&ON_CREATE));
//! assert!(!constraint.applies_to(&Group::DEFAULT));
//! ```

/// Failure text used when a declaration doesn't override it.
pub const DEFAULT_MESSAGE: &str = "Invalid value";

#[cfg(feature = "serde")]
fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

/// Declares the set of string values a field is allowed to hold.
///
/// The declaration carries four attributes:
///
/// * `list` - the allowed values, required at construction. Order is kept
///   for deterministic message rendering but has no effect on validation.
/// * `message` - failure text, defaults to [`DEFAULT_MESSAGE`].
/// * `groups` - validation-group classifiers for conditional validation.
///   A declaration with no groups belongs to [`Group::DEFAULT`] only.
/// * `payload` - opaque metadata carried through to the host untouched.
///
/// With the `serde` feature enabled, `list` and `message` round-trip through
/// configuration files; `groups` and `payload` identify code, not data, and
/// are skipped.
///
/// # Examples
///
/// ```
/// use allowset::{AllowList, AllowListValidator, Candidate, ConstraintValidator};
///
/// let constraint = AllowList::new(["EUR", "USD", "GBP"]);
///
/// let mut validator = AllowListValidator::default();
/// validator.initialize(&constraint);
///
/// assert!(validator.check(&Candidate::from("EUR")).is_success());
/// assert!(validator.check(&Candidate::from("JPY")).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllowList {
    list: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_message"))]
    message: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    groups: Vec<Group>,
    #[cfg_attr(feature = "serde", serde(skip))]
    payload: Vec<Payload>,
}

impl AllowList {
    /// Create a declaration from the allowed values.
    ///
    /// Duplicates are kept here and collapse later when a validator builds
    /// its lookup set from the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::AllowList;
    ///
    /// let constraint = AllowList::new(["RED", "GREEN", "BLUE"]);
    /// assert_eq!(constraint.list().len(), 3);
    /// ```
    pub fn new<I, S>(list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list: list.into_iter().map(Into::into).collect(),
            message: DEFAULT_MESSAGE.to_string(),
            groups: Vec::new(),
            payload: Vec::new(),
        }
    }

    /// Override the failure message for this use site.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::AllowList;
    ///
    /// let constraint = AllowList::new(["A", "B"]).with_message("must be A or B");
    /// assert_eq!(constraint.message(), "must be A or B");
    /// ```
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Restrict this declaration to the given validation groups.
    pub fn with_groups<I>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = Group>,
    {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Attach payload metadata, carried through to the host untouched.
    pub fn with_payload<I>(mut self, payload: I) -> Self
    where
        I: IntoIterator<Item = Payload>,
    {
        self.payload = payload.into_iter().collect();
        self
    }

    /// The allowed values, in declaration order.
    pub fn list(&self) -> &[String] {
        &self.list
    }

    /// The failure message for this declaration.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The validation groups this declaration is restricted to.
    ///
    /// Empty means the declaration belongs to [`Group::DEFAULT`].
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The payload metadata attached to this declaration.
    pub fn payload(&self) -> &[Payload] {
        &self.payload
    }

    /// Whether this declaration participates when `active` is being validated.
    ///
    /// A declaration with no explicit groups applies to the default group
    /// only; otherwise membership decides.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::{AllowList, Group};
    ///
    /// const ADMIN: Group = Group::new("admin");
    ///
    /// let ungrouped = AllowList::new(["A"]);
    /// assert!(ungrouped.applies_to(&Group::DEFAULT));
    /// assert!(!ungrouped.applies_to(&ADMIN));
    ///
    /// let grouped = AllowList::new(["A"]).with_groups([ADMIN]);
    /// assert!(grouped.applies_to(&ADMIN));
    /// assert!(!grouped.applies_to(&Group::DEFAULT));
    /// ```
    pub fn applies_to(&self, active: &Group) -> bool {
        if self.groups.is_empty() {
            *active == Group::DEFAULT
        } else {
            self.groups.contains(active)
        }
    }
}

/// A validation-group classifier.
///
/// Groups let a host validate different subsets of constraints in different
/// situations (create vs. update, admin vs. user). The crate only decides
/// membership via [`AllowList::applies_to`]; what an active group means is
/// the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group(&'static str);

impl Group {
    /// The implicit group of declarations with no explicit groups.
    pub const DEFAULT: Group = Group::new("default");

    /// Create a group from a static label.
    pub const fn new(name: &'static str) -> Self {
        Group(name)
    }

    /// The group's label.
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque metadata attached to a declaration and carried through untouched.
///
/// The crate never interprets payloads; hosts use them to tag constraints
/// with severity or routing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Payload(&'static str);

impl Payload {
    /// Create a payload marker from a static label.
    pub const fn new(label: &'static str) -> Self {
        Payload(label)
    }

    /// The payload's label.
    pub fn label(&self) -> &'static str {
        self.0
    }
}
