// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::set_featured_image,
        crate::presentation::http::controllers::likes::add_like,
        crate::presentation::http::controllers::likes::remove_like,
        crate::presentation::http::controllers::likes::is_liked_by,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::add_comment,
        crate::presentation::http::controllers::comments::remove_comment,
        crate::presentation::http::controllers::comments::moderate_comment,
        crate::presentation::http::controllers::comments::moderation_inbox,
        crate::presentation::http::controllers::users::register_user,
        crate::presentation::http::controllers::users::get_user,
        crate::presentation::http::controllers::users::update_profile,
        crate::presentation::http::controllers::users::set_profile_image,
        crate::presentation::http::controllers::users::articles_by_author,
        crate::presentation::http::controllers::users::articles_liked_by,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::comments::AddCommentRequest,
            crate::presentation::http::controllers::comments::ModerateCommentRequest,
            crate::presentation::http::controllers::users::RegisterUserRequest,
            crate::presentation::http::controllers::users::UpdateProfileRequest,
            crate::application::dto::UserDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailsDto,
            crate::application::dto::LikeDto,
            crate::application::dto::CommentDto,
            crate::application::dto::ModerationStatusDto,
            crate::application::dto::Page<crate::application::dto::ArticleDetailsDto>
        )
    ),
    tags(
        (name = "Articles", description = "Article authoring and listing endpoints"),
        (name = "Comments", description = "Commenting and moderation endpoints"),
        (name = "Likes", description = "Like toggle endpoints"),
        (name = "Users", description = "Profile endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("userHeader" = [])),
    info(
        title = "IdeaShare API",
        description = "Content sharing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "userHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-user-id"))),
        );

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}
