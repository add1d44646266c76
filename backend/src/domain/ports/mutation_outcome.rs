//! Result type shared by mutating service operations.

/// Outcome of an update or removal.
///
/// Business failures are recorded in the request notifier, so the outcome
/// only needs to say whether anything happened. `Rejected` is returned if and
/// only if the call added at least one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome<T> {
    /// The mutation was persisted.
    Committed(T),
    /// No entity exists with the requested id.
    NotFound,
    /// A business rule failed; see the notifier for the reasons.
    Rejected,
}

impl<T> MutationOutcome<T> {
    /// Whether the mutation was persisted.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// Transform the committed value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MutationOutcome<U> {
        match self {
            Self::Committed(value) => MutationOutcome::Committed(f(value)),
            Self::NotFound => MutationOutcome::NotFound,
            Self::Rejected => MutationOutcome::Rejected,
        }
    }
}
