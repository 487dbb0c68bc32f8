//! Candidate values extracted at the host boundary
//!
//! A host framework hands validators whatever a field happens to contain at
//! runtime. Rather than inspecting types inside the predicate, the boundary
//! classifies the value once into a closed [`Candidate`] variant and the
//! validator matches over that.
//!
//! The conversions here are the classification rules: optional strings and
//! string collections map onto `Absent`/`Scalar`/`Sequence`, and anything
//! that isn't a string shape - a number, a map, a mixed array - becomes
//! `Unsupported`, which every validator rejects.
//!
//! # Examples
//!
//! ```
//! use allowset::Candidate;
//!
//! assert_eq!(Candidate::from("RED"), Candidate::Scalar("RED".to_string()));
//! assert_eq!(Candidate::from(None::<&str>), Candidate::Absent);
//! assert_eq!(
//!     Candidate::from(vec!["RED", "BLUE"]),
//!     Candidate::Sequence(vec!["RED".to_string(), "BLUE".to_string()]),
//! );
//! ```

/// A field value as seen by a validator.
///
/// The four variants cover everything a validator distinguishes: nothing
/// present, one string, a sequence of strings, or a shape the boundary
/// could not classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// No value present. Never a violation on its own - required-ness is a
    /// different constraint's concern.
    Absent,
    /// A single string value.
    Scalar(String),
    /// A homogeneous sequence of strings. Iteration order does not affect
    /// any verdict.
    Sequence(Vec<String>),
    /// A runtime shape the boundary could not classify as a string or a
    /// string sequence. Validators reject it unconditionally.
    Unsupported,
}

impl Candidate {
    /// Whether this candidate carries no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Candidate;
    ///
    /// assert!(Candidate::Absent.is_absent());
    /// assert!(!Candidate::from("RED").is_absent());
    /// ```
    pub fn is_absent(&self) -> bool {
        matches!(self, Candidate::Absent)
    }

    /// Classify an untyped JSON value.
    ///
    /// `null` maps to `Absent`, a string to `Scalar`, an array of strings
    /// to `Sequence`. An array containing any non-string element, and every
    /// other JSON shape (numbers, booleans, objects), maps to `Unsupported`.
    /// No element-wise coercion is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use allowset::Candidate;
    /// use serde_json::json;
    ///
    /// assert_eq!(Candidate::from_json(&json!(null)), Candidate::Absent);
    /// assert_eq!(
    ///     Candidate::from_json(&json!("RED")),
    ///     Candidate::Scalar("RED".to_string()),
    /// );
    /// assert_eq!(Candidate::from_json(&json!(42)), Candidate::Unsupported);
    /// assert_eq!(
    ///     Candidate::from_json(&json!(["RED", 42])),
    ///     Candidate::Unsupported,
    /// );
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Candidate::Absent,
            Value::String(s) => Candidate::Scalar(s.clone()),
            Value::Array(items) => {
                let mut strings = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => strings.push(s.clone()),
                        _ => return Candidate::Unsupported,
                    }
                }
                Candidate::Sequence(strings)
            }
            _ => Candidate::Unsupported,
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Scalar(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Scalar(value)
    }
}

impl From<Option<&str>> for Candidate {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(s) => Candidate::from(s),
            None => Candidate::Absent,
        }
    }
}

impl From<Option<String>> for Candidate {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => Candidate::Scalar(s),
            None => Candidate::Absent,
        }
    }
}

impl From<Vec<String>> for Candidate {
    fn from(value: Vec<String>) -> Self {
        Candidate::Sequence(value)
    }
}

impl From<Vec<&str>> for Candidate {
    fn from(value: Vec<&str>) -> Self {
        Candidate::Sequence(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Candidate {
    fn from(value: &[&str]) -> Self {
        Candidate::Sequence(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Option<Vec<String>>> for Candidate {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            Some(items) => Candidate::Sequence(items),
            None => Candidate::Absent,
        }
    }
}
