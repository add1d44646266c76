//! Comment entity and its validation ruleset.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Owned, RuleViolation, Ruleset, UserId};

/// Maximum number of characters accepted in a comment body.
pub const COMMENT_CONTENT_MAX: usize = 1000;

/// Input for [`Comment::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    /// Identifier assigned by the service.
    pub id: Uuid,
    /// Post the comment belongs to.
    pub post_id: Uuid,
    /// Member who wrote the comment.
    pub author_id: UserId,
    /// Body text.
    pub content: String,
    /// Creation instant from the service clock.
    pub created_at: DateTime<Utc>,
}

/// A reader's comment on a post.
///
/// ## Invariants
/// - `id`, `post_id`, `author_id` and `created_at` never change after
///   construction; only the content can be revised.
/// - Shape rules (non-empty content, bounded length, non-nil post) are
///   checked by [`CommentRuleset`], not by the constructor, so rejected input
///   is reported through the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    id: Uuid,
    post_id: Uuid,
    author_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Build a comment from its parts.
    pub fn new(draft: CommentDraft) -> Self {
        let CommentDraft {
            id,
            post_id,
            author_id,
            content,
            created_at,
        } = draft;
        Self {
            id,
            post_id,
            author_id,
            content,
            created_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Parent post.
    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    /// Body text.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// When the comment was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the body text. No other field is mutable.
    pub fn revise(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Owned for Comment {
    fn author_id(&self) -> &UserId {
        &self.author_id
    }
}

/// Shape rules for [`Comment`].
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentRuleset;

impl Ruleset<Comment> for CommentRuleset {
    fn validate(&self, entity: &Comment) -> Vec<RuleViolation> {
        let mut violations = Vec::new();
        if entity.content.trim().is_empty() {
            violations.push(RuleViolation::new("content", "content is required"));
        } else if entity.content.chars().count() > COMMENT_CONTENT_MAX {
            violations.push(RuleViolation::new(
                "content",
                format!("content must be at most {COMMENT_CONTENT_MAX} characters"),
            ));
        }
        if entity.post_id.is_nil() {
            violations.push(RuleViolation::new("postId", "post id is required"));
        }
        violations
    }
}
