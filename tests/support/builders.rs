// tests/support/builders.rs
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use ideashare_core::application::dto::ArticleDetailsDto;
use ideashare_core::application::commands::articles::CreateArticleCommand;
use ideashare_core::application::services::{ApplicationServices, Repositories};
use ideashare_core::domain::user::{User, UserId, Username};
use ideashare_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{
    FixedClock, MemArticleReadRepo, MemArticleTagRepo, MemArticleWriteRepo, MemCommentRepo,
    MemLikeRepo, MemStore, MemTagRepo, MemUserRepo, MemoryImageStore,
};

/// One timestamp for the whole suite; the fixed clock hands it to every
/// service call.
pub static NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap());

/// Wires the real application services against the in-memory doubles.
pub fn services(store: &Arc<MemStore>) -> ApplicationServices {
    ApplicationServices::new(
        Repositories {
            article_write: Arc::new(MemArticleWriteRepo(Arc::clone(store))),
            article_read: Arc::new(MemArticleReadRepo(Arc::clone(store))),
            tags: Arc::new(MemTagRepo(Arc::clone(store))),
            article_tags: Arc::new(MemArticleTagRepo(Arc::clone(store))),
            likes: Arc::new(MemLikeRepo(Arc::clone(store))),
            comments: Arc::new(MemCommentRepo(Arc::clone(store))),
            users: Arc::new(MemUserRepo(Arc::clone(store))),
        },
        Arc::new(MemoryImageStore),
        Arc::new(FixedClock(*NOW)),
    )
}

/// Full router over the in-memory doubles, ready for `oneshot` calls.
pub fn make_test_router(store: &Arc<MemStore>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services(store)),
    };
    build_router(state, &[])
}

pub fn seed_user(store: &MemStore, id: &str, username: &str) -> User {
    let user = User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        display_name: username.to_string(),
        profile_image: None,
        created_at: *NOW,
    };
    store
        .users
        .lock()
        .unwrap()
        .insert(id.to_string(), user.clone());
    user
}

pub fn user_id(raw: &str) -> UserId {
    UserId::new(raw).unwrap()
}

pub async fn create_article(
    services: &ApplicationServices,
    author: &UserId,
    title: &str,
    tags: Option<&str>,
) -> ArticleDetailsDto {
    services
        .article_commands
        .create_article(
            author,
            CreateArticleCommand {
                title: title.to_string(),
                description: format!("about {title}"),
                body: format!("{title} body"),
                tags: tags.map(str::to_string),
                featured_image: None,
            },
        )
        .await
        .unwrap()
}
