// src/domain/tag/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// A tag's identity is its text: case-sensitive, no surrogate key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(String);

impl TagId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("tag id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagId> for String {
    fn from(value: TagId) -> Self {
        value.0
    }
}

/// Catalog entry. Tags are created lazily on first use and never
/// mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
}

/// Association row linking one article to one tag. The
/// (article_id, tag_id) pair is unique in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTag {
    pub article_id: ArticleId,
    pub tag_id: TagId,
}
