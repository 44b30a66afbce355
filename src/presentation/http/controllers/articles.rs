// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDetailsDto, Page},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestingUser;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, Query},
    http::header::HeaderName,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleListParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    /// Comma-delimited list of title prefixes.
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tags: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number; requires per_page"),
        ("per_page" = Option<u32>, Query, description = "Page size; requires page"),
        ("sort" = Option<String>, Query, description = "Sort key: title, -title, date or -date"),
        ("tag" = Option<String>, Query, description = "Only articles carrying this tag"),
        ("title" = Option<String>, Query, description = "Comma-delimited title prefixes")
    ),
    responses(
        (status = 200, description = "Page of articles; X-Total-Count carries the unpaged total.", body = crate::application::dto::Page<crate::application::dto::ArticleDetailsDto>),
        (status = 400, description = "Invalid filter or pagination.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<impl IntoResponse> {
    let page = match (params.page, params.per_page) {
        (Some(page), Some(per_page)) => Some((page, per_page)),
        (None, None) => None,
        _ => {
            return Err(HttpError::from_error(
                crate::application::error::ApplicationError::validation(
                    "pagination",
                    "both page and per_page are required for pagination",
                ),
            ));
        }
    };

    let title_prefixes = params
        .title
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let result: Page<ArticleDetailsDto> = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: params.tag,
            title_prefixes,
            sort: params.sort,
            page,
        })
        .await
        .into_http()?;

    let total_header = (
        HeaderName::from_static("x-total-count"),
        result.total.to_string(),
    );
    Ok(([total_header], Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with author, tags and likes.", body = crate::application::dto::ArticleDetailsDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<ArticleDetailsDto>> {
    state
        .services
        .article_queries
        .get_article(article_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = crate::application::dto::ArticleDetailsDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorBody),
        (status = 401, description = "Missing requesting user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDetailsDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        description: payload.description,
        body: payload.body,
        tags: payload.tags,
        featured_image: None,
    };

    state
        .services
        .article_commands
        .create_article(&user_id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = crate::application::dto::ArticleDetailsDto),
        (status = 403, description = "Requesting user does not own the article.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(article_id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDetailsDto>> {
    let command = UpdateArticleCommand {
        id: article_id,
        title: payload.title,
        description: payload.description,
        body: payload.body,
        tags: payload.tags,
        featured_image: None,
    };

    state
        .services
        .article_commands
        .update_article(&user_id, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted."),
        (status = 403, description = "Requesting user does not own the article.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user_id, article_id)
        .await
        .into_http()?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Raw-body upload; the stored reference lands on the article.
#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}/image",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Article with the new featured image.", body = crate::application::dto::ArticleDetailsDto),
        (status = 403, description = "Requesting user does not own the article.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn set_featured_image(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Path(article_id): Path<i64>,
    data: Bytes,
) -> HttpResult<Json<ArticleDetailsDto>> {
    state
        .services
        .article_commands
        .set_featured_image(&user_id, article_id, data)
        .await
        .into_http()
        .map(Json)
}
