// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments, likes, users},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, patch, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins);

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/users", post(users::register_user))
        .route("/api/v1/users/me", patch(users::update_profile))
        .route("/api/v1/users/me/image", put(users::set_profile_image))
        .route("/api/v1/users/me/comments", get(comments::moderation_inbox))
        .route("/api/v1/users/{username}", get(users::get_user))
        .route(
            "/api/v1/users/{username}/articles",
            get(users::articles_by_author),
        )
        .route(
            "/api/v1/users/{username}/liked",
            get(users::articles_liked_by),
        )
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/image",
            put(articles::set_featured_image),
        )
        .route(
            "/api/v1/articles/{id}/like",
            post(likes::add_like).delete(likes::remove_like),
        )
        .route(
            "/api/v1/articles/{id}/liked/{username}",
            get(likes::is_liked_by),
        )
        .route(
            "/api/v1/articles/{id}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route("/api/v1/comments/{id}", delete(comments::remove_comment))
        .route(
            "/api/v1/comments/{id}/moderate",
            post(comments::moderate_comment),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Wide open unless origins are configured; the frontend usually sits
/// on another host during development.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        layer.allow_origin(origins)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
