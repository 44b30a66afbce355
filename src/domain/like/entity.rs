// src/domain/like/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Per-(user, article) endorsement; the pair is unique in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLike {
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub created_at: DateTime<Utc>,
}
