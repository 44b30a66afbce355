// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{RegisterUserCommand, UpdateProfileCommand},
    dto::{ArticleDetailsDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestingUser;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SortParams {
    #[serde(default)]
    pub sort: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "Registered user profile.", body = crate::application::dto::UserDto),
        (status = 409, description = "Username already taken.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn register_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterUserRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .register(RegisterUserCommand {
            username: payload.username,
            display_name: payload.display_name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Public profile.", body = crate::application::dto::UserDto),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_by_username(&username)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile.", body = crate::application::dto::UserDto),
        (status = 401, description = "Missing requesting user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_profile(
            &user_id,
            UpdateProfileCommand {
                display_name: payload.display_name,
                profile_image: None,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/users/me/image",
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Profile with the new image.", body = crate::application::dto::UserDto),
        (status = 401, description = "Missing requesting user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn set_profile_image(
    Extension(state): Extension<HttpState>,
    RequestingUser(user_id): RequestingUser,
    data: Bytes,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_profile(
            &user_id,
            UpdateProfileCommand {
                display_name: None,
                profile_image: Some(data),
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/articles",
    params(
        ("username" = String, Path, description = "Author's username"),
        ("sort" = Option<String>, Query, description = "Sort key: title, -title, date or -date")
    ),
    responses(
        (status = 200, description = "Articles written by the user.", body = [crate::application::dto::ArticleDetailsDto]),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn articles_by_author(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
    Query(params): Query<SortParams>,
) -> HttpResult<Json<Vec<ArticleDetailsDto>>> {
    state
        .services
        .article_queries
        .list_by_author(&username, params.sort.as_deref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{username}/liked",
    params(
        ("username" = String, Path, description = "Username"),
        ("sort" = Option<String>, Query, description = "Sort key: title, -title, date or -date")
    ),
    responses(
        (status = 200, description = "Articles the user has liked.", body = [crate::application::dto::ArticleDetailsDto]),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Users"
)]
pub async fn articles_liked_by(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
    Query(params): Query<SortParams>,
) -> HttpResult<Json<Vec<ArticleDetailsDto>>> {
    state
        .services
        .article_queries
        .list_liked_by(&username, params.sort.as_deref())
        .await
        .into_http()
        .map(Json)
}
