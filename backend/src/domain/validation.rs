//! Ruleset validation funnelled into the request notifier.

use std::fmt;

use crate::domain::{Notification, Notifier};

/// One failed rule, described for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    field: &'static str,
    message: String,
}

impl RuleViolation {
    /// Construct a violation for the named field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable description of the broken rule.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Stateless set of rules for an entity type.
///
/// Implementations must be pure: the same entity always yields the same
/// violations in the same order.
pub trait Ruleset<E: ?Sized> {
    /// Check `entity` and return every broken rule.
    fn validate(&self, entity: &E) -> Vec<RuleViolation>;
}

/// Apply `ruleset` to `entity`, reporting each violation to `notifier`.
///
/// Returns `true` when the entity is valid, leaving the notifier untouched.
/// Otherwise every violation message is appended in ruleset order and
/// `false` is returned; callers must then abort without mutating anything.
///
/// # Examples
/// ```
/// use blog_backend::domain::{Notifier, RuleViolation, Ruleset, run_validation};
///
/// struct NonEmpty;
///
/// impl Ruleset<str> for NonEmpty {
///     fn validate(&self, entity: &str) -> Vec<RuleViolation> {
///         if entity.is_empty() {
///             vec![RuleViolation::new("value", "value is required")]
///         } else {
///             Vec::new()
///         }
///     }
/// }
///
/// let mut notifier = Notifier::new();
/// assert!(run_validation(&mut notifier, &NonEmpty, "ok"));
/// assert!(!run_validation(&mut notifier, &NonEmpty, ""));
/// assert_eq!(notifier.list_notifications().len(), 1);
/// ```
pub fn run_validation<E, R>(notifier: &mut Notifier, ruleset: &R, entity: &E) -> bool
where
    E: ?Sized,
    R: Ruleset<E> + ?Sized,
{
    let violations = ruleset.validate(entity);
    if violations.is_empty() {
        return true;
    }

    for violation in violations {
        notifier.handle(Notification::validation(violation.message));
    }
    false
}
