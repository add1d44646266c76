//! Identity and ownership checks shared by every mutating service.
//!
//! Both rules report through the request [`Notifier`] and return a boolean
//! gate; they never raise errors.

use crate::domain::{NotificationKind, Notifier, Principal, UserId};

/// Message reported when a mutation arrives without a principal.
pub const AUTHENTICATION_REQUIRED_MESSAGE: &str = "authentication required";

/// Message reported when the principal neither owns the entity nor is an admin.
pub const PERMISSION_DENIED_MESSAGE: &str = "you do not have permission to perform this action";

/// Entities created by, and therefore owned by, a user.
pub trait Owned {
    /// Identifier of the user who created the entity.
    fn author_id(&self) -> &UserId;
}

/// Require a resolved principal for a mutating operation.
///
/// Reports [`NotificationKind::AuthenticationRequired`] and returns `None`
/// when `actor` is absent.
pub fn require_principal<'a>(
    notifier: &mut Notifier,
    actor: Option<&'a Principal>,
) -> Option<&'a Principal> {
    if actor.is_none() {
        notifier.notify(
            NotificationKind::AuthenticationRequired,
            AUTHENTICATION_REQUIRED_MESSAGE,
        );
    }
    actor
}

/// Ownership-or-admin predicate.
///
/// # Examples
/// ```
/// use blog_backend::domain::{Owned, Principal, UserId, is_owner_or_admin};
///
/// struct Note(UserId);
///
/// impl Owned for Note {
///     fn author_id(&self) -> &UserId {
///         &self.0
///     }
/// }
///
/// let author = UserId::random();
/// let note = Note(author.clone());
/// assert!(is_owner_or_admin(&note, &Principal::member(author)));
/// assert!(is_owner_or_admin(&note, &Principal::admin(UserId::random())));
/// assert!(!is_owner_or_admin(&note, &Principal::member(UserId::random())));
/// ```
pub fn is_owner_or_admin<E: Owned + ?Sized>(entity: &E, principal: &Principal) -> bool {
    principal.is_admin() || entity.author_id() == principal.user_id()
}

/// Enforce the ownership-or-admin rule, reporting a denial to `notifier`.
pub fn ensure_owner_or_admin<E: Owned + ?Sized>(
    notifier: &mut Notifier,
    entity: &E,
    principal: &Principal,
) -> bool {
    if is_owner_or_admin(entity, principal) {
        return true;
    }
    notifier.notify(NotificationKind::PermissionDenied, PERMISSION_DENIED_MESSAGE);
    false
}
