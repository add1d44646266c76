//! Request-scoped collection of business-rule failures.
//!
//! Services report expected failures (invalid input, missing identity,
//! insufficient ownership) by appending to the [`Notifier`] they are handed
//! for the current request instead of returning an error. The inbound adapter
//! inspects the notifier once the service call returns and decides the
//! response from what was collected.
//!
//! A notifier belongs to exactly one request. It is created by the handler,
//! passed down as `&mut Notifier`, and dropped with the request; it is never
//! stored in shared state.

use std::fmt;

/// Failure category carried by a [`Notification`].
///
/// Ordered by precedence: when several kinds are present the greatest one
/// decides the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationKind {
    /// The entity failed its validation ruleset.
    Validation,
    /// The principal may not act on the targeted entity.
    PermissionDenied,
    /// The operation needs an authenticated principal and none was supplied.
    AuthenticationRequired,
}

/// A single human-readable failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
}

impl Notification {
    /// Construct a notification of the given kind.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Construct a [`NotificationKind::Validation`] notification.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Validation, message)
    }

    /// Failure category.
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Message shown to the client.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered collector of [`Notification`]s for one request.
///
/// Once any notification is added the request is considered failed,
/// whatever the service call returns afterwards.
///
/// # Examples
/// ```
/// use blog_backend::domain::{Notification, Notifier};
///
/// let mut notifier = Notifier::new();
/// assert!(!notifier.has_notification());
///
/// notifier.handle(Notification::validation("content is required"));
/// assert!(notifier.has_notification());
/// assert_eq!(notifier.list_notifications()[0].message(), "content is required");
/// ```
#[derive(Debug, Default)]
pub struct Notifier {
    notifications: Vec<Notification>,
}

impl Notifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any notification has been collected.
    pub fn has_notification(&self) -> bool {
        !self.notifications.is_empty()
    }

    /// All collected notifications in insertion order.
    pub fn list_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Append one notification.
    pub fn handle(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Append a notification built from its parts.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.handle(Notification::new(kind, message));
    }

    /// Highest-precedence kind collected so far, if any.
    pub fn dominant_kind(&self) -> Option<NotificationKind> {
        self.notifications.iter().map(Notification::kind).max()
    }

    /// Messages in insertion order, consuming the notifier.
    pub fn into_messages(self) -> Vec<String> {
        self.notifications
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }
}
