// src/presentation/http/controllers/likes.rs
use crate::application::dto::LikeDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestingUser;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/like",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Like recorded.", body = crate::application::dto::LikeDto),
        (status = 404, description = "No such article or user.", body = crate::presentation::http::error::ErrorBody),
        (status = 409, description = "Like already exists.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Likes"
)]
pub async fn add_like(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<LikeDto>> {
    state
        .services
        .like_commands
        .add_like(&user_id, article_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/like",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Like removed."),
        (status = 404, description = "No such like, article or user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Likes"
)]
pub async fn remove_like(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .like_commands
        .remove_like(&user_id, article_id)
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "success": true })))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/liked/{username}",
    params(
        ("id" = i64, Path, description = "Article identifier"),
        ("username" = String, Path, description = "Username to check")
    ),
    responses(
        (status = 200, description = "Whether the user has liked the article."),
        (status = 404, description = "No such article or user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Likes"
)]
pub async fn is_liked_by(
    Extension(state): Extension<HttpState>,
    Path((article_id, username)): Path<(i64, String)>,
) -> HttpResult<Json<serde_json::Value>> {
    let liked = state
        .services
        .article_queries
        .is_liked_by(&username, article_id)
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "liked": liked })))
}
