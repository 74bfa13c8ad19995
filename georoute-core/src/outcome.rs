//! Result of an operation that may have been a dry run.

/// Either the parsed result of a request or, for dry runs, a description of
/// the request that would have been sent.
///
/// # Examples
///
/// ```
/// use georoute_core::Outcome;
///
/// let dry: Outcome<u32> = Outcome::DryRun("GET /isochrone".to_owned());
/// assert!(dry.is_dry_run());
/// assert_eq!(dry.into_description().as_deref(), Some("GET /isochrone"));
///
/// let executed = Outcome::Executed(3).map(|n| n * 2);
/// assert_eq!(executed.into_executed(), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The request was sent and its response parsed.
    Executed(T),
    /// The request was only described.
    DryRun(String),
}

impl<T> Outcome<T> {
    /// Whether this outcome came from a dry run.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        matches!(self, Self::DryRun(_))
    }

    /// Return the parsed result, discarding dry-run descriptions.
    #[must_use]
    pub fn into_executed(self) -> Option<T> {
        match self {
            Self::Executed(value) => Some(value),
            Self::DryRun(_) => None,
        }
    }

    /// Return the dry-run description, discarding parsed results.
    #[must_use]
    pub fn into_description(self) -> Option<String> {
        match self {
            Self::Executed(_) => None,
            Self::DryRun(description) => Some(description),
        }
    }

    /// Transform the executed value, leaving descriptions untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Executed(value) => Outcome::Executed(f(value)),
            Self::DryRun(description) => Outcome::DryRun(description),
        }
    }
}
