// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::ModerationVerdict, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestingUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub body: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateCommentRequest {
    pub verdict: ModerationVerdict,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Comments on the article, oldest first.", body = [crate::application::dto::CommentDto]),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .get_for_article(article_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Posted comment, pending moderation.", body = crate::application::dto::CommentDto),
        (status = 404, description = "No such article or user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(article_id): Path<i64>,
    Json(payload): Json<AddCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .add_comment(&user_id, article_id, payload.body)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Comment deleted."),
        (status = 403, description = "Neither comment author nor article owner.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No such comment.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Comments"
)]
pub async fn remove_comment(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(comment_id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .remove_comment(&user_id, comment_id)
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "success": true })))
}

#[utoipa::path(
    post,
    path = "/api/v1/comments/{id}/moderate",
    params(("id" = i64, Path, description = "Comment identifier")),
    request_body = ModerateCommentRequest,
    responses(
        (status = 200, description = "Comment with its new moderation status.", body = crate::application::dto::CommentDto),
        (status = 403, description = "Requesting user does not own the article.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No such comment.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Comments"
)]
pub async fn moderate_comment(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(comment_id): Path<i64>,
    Json(payload): Json<ModerateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .moderate_comment(&user_id, comment_id, payload.verdict)
        .await
        .into_http()
        .map(Json)
}

/// Moderation inbox: every comment left on the requesting user's
/// articles, pending ones first.
#[utoipa::path(
    get,
    path = "/api/v1/users/me/comments",
    responses(
        (status = 200, description = "Comments on the requesting user's articles.", body = [crate::application::dto::CommentDto]),
        (status = 401, description = "Missing requesting user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Comments"
)]
pub async fn moderation_inbox(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_for_author(&user_id)
        .await
        .into_http()
        .map(Json)
}
