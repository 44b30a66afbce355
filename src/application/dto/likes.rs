use crate::domain::like::Like;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeDto {
    pub user_id: String,
    pub article_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Like> for LikeDto {
    fn from(like: Like) -> Self {
        Self {
            user_id: like.user_id.into(),
            article_id: like.article_id.into(),
            created_at: like.created_at,
        }
    }
}
