// src/domain/comment/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "comment body cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

/// Tri-state moderation flag, stored as two booleans; pending iff
/// neither is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModerationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ModerationStatus {
    pub fn from_flags(is_accepted: bool, is_rejected: bool) -> Self {
        match (is_accepted, is_rejected) {
            (true, _) => Self::Accepted,
            (false, true) => Self::Rejected,
            (false, false) => Self::Pending,
        }
    }

    pub fn flags(self) -> (bool, bool) {
        match self {
            Self::Pending => (false, false),
            Self::Accepted => (true, false),
            Self::Rejected => (false, true),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub author_id: UserId,
    pub article_id: ArticleId,
    pub posted_at: DateTime<Utc>,
    pub status: ModerationStatus,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub author_id: UserId,
    pub article_id: ArticleId,
    pub posted_at: DateTime<Utc>,
}

/// Comment with its author resolved, as listings hand it to projection.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}
