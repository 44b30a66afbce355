use crate::application::dto::users::UserDto;
use crate::domain::comment::{CommentWithAuthor, ModerationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatusDto {
    Pending,
    Accepted,
    Rejected,
}

impl From<ModerationStatus> for ModerationStatusDto {
    fn from(status: ModerationStatus) -> Self {
        match status {
            ModerationStatus::Pending => Self::Pending,
            ModerationStatus::Accepted => Self::Accepted,
            ModerationStatus::Rejected => Self::Rejected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub article_id: i64,
    pub posted_at: DateTime<Utc>,
    pub status: ModerationStatusDto,
    pub author: UserDto,
}

impl From<CommentWithAuthor> for CommentDto {
    fn from(value: CommentWithAuthor) -> Self {
        Self {
            id: value.comment.id.into(),
            body: value.comment.body.into(),
            article_id: value.comment.article_id.into(),
            posted_at: value.comment.posted_at,
            status: value.comment.status.into(),
            author: value.author.into(),
        }
    }
}
