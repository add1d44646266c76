//! Blog post entity and its validation ruleset.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Owned, RuleViolation, Ruleset, UserId};

/// Maximum number of characters accepted in a post title.
pub const POST_TITLE_MAX: usize = 200;

/// Input for [`Post::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Identifier assigned by the service.
    pub id: Uuid,
    /// Member who published the post.
    pub author_id: UserId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Creation instant from the service clock.
    pub created_at: DateTime<Utc>,
}

/// A published article.
///
/// ## Invariants
/// - `id`, `author_id` and `created_at` are fixed at construction.
/// - Title and content are revised together through [`Post::revise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: Uuid,
    author_id: UserId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Build a post from its parts.
    pub fn new(draft: PostDraft) -> Self {
        let PostDraft {
            id,
            author_id,
            title,
            content,
            created_at,
        } = draft;
        Self {
            id,
            author_id,
            title,
            content,
            created_at,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Headline.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Body text.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// When the post was published.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the title and body.
    pub fn revise(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}

impl Owned for Post {
    fn author_id(&self) -> &UserId {
        &self.author_id
    }
}

/// Shape rules for [`Post`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PostRuleset;

impl Ruleset<Post> for PostRuleset {
    fn validate(&self, entity: &Post) -> Vec<RuleViolation> {
        let mut violations = Vec::new();
        if entity.title.trim().is_empty() {
            violations.push(RuleViolation::new("title", "title is required"));
        } else if entity.title.chars().count() > POST_TITLE_MAX {
            violations.push(RuleViolation::new(
                "title",
                format!("title must be at most {POST_TITLE_MAX} characters"),
            ));
        }
        if entity.content.trim().is_empty() {
            violations.push(RuleViolation::new("content", "content is required"));
        }
        violations
    }
}
