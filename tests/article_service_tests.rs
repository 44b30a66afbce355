// tests/article_service_tests.rs
mod support;

use bytes::Bytes;
use ideashare_core::application::commands::articles::{
    CreateArticleCommand, UpdateArticleCommand,
};
use ideashare_core::application::error::ApplicationError;
use ideashare_core::application::queries::articles::ListArticlesQuery;
use support::{MemStore, NOW, create_article, seed_user, services, user_id};

#[tokio::test]
async fn create_returns_the_hydrated_article() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);
    let author = user_id("u1");

    let created = services
        .article_commands
        .create_article(
            &author,
            CreateArticleCommand {
                title: "First post".into(),
                description: "teaser".into(),
                body: "hello".into(),
                tags: Some("intro".into()),
                featured_image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.article.title, "First post");
    assert_eq!(created.article.author_id, "u1");
    assert_eq!(created.article.created_at, *NOW);
    assert_eq!(created.article.updated_at, None);
    assert_eq!(created.author.username, "alice");
    assert_eq!(created.tags, vec!["intro"]);
    assert!(created.likes.is_empty());
}

#[tokio::test]
async fn update_by_non_owner_is_rejected_and_leaves_the_article_unchanged() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    seed_user(&store, "u2", "bob");
    let services = services(&store);
    let author = user_id("u1");

    let created = create_article(&services, &author, "original", Some("keep")).await;

    let err = services
        .article_commands
        .update_article(
            &user_id("u2"),
            UpdateArticleCommand {
                id: created.article.id,
                title: "hijacked".into(),
                description: String::new(),
                body: "hijacked body".into(),
                tags: Some("stolen".into()),
                featured_image: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Unauthorized { .. }));
    assert_eq!(err.field(), "user");

    let stored = store
        .articles
        .lock()
        .unwrap()
        .get(&created.article.id)
        .cloned()
        .unwrap();
    assert_eq!(stored.title.as_str(), "original");
    assert_eq!(stored.updated_at, None);
    assert_eq!(store.link_tags(created.article.id), vec!["keep"]);
}

#[tokio::test]
async fn update_of_missing_article_is_keyed_not_found() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);

    let err = services
        .article_commands
        .update_article(
            &user_id("u1"),
            UpdateArticleCommand {
                id: 99,
                title: "t".into(),
                description: String::new(),
                body: "b".into(),
                tags: None,
                featured_image: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound { .. }));
    assert_eq!(err.field(), "article");
}

#[tokio::test]
async fn update_overwrites_content_and_stamps_updated_at() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);
    let author = user_id("u1");

    let created = create_article(&services, &author, "before", None).await;
    let updated = services
        .article_commands
        .update_article(
            &author,
            UpdateArticleCommand {
                id: created.article.id,
                title: "after".into(),
                description: "new teaser".into(),
                body: "new body".into(),
                tags: None,
                featured_image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.article.title, "after");
    assert_eq!(updated.article.body, "new body");
    assert_eq!(updated.article.updated_at, Some(*NOW));
}

#[tokio::test]
async fn delete_by_non_owner_is_rejected() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    seed_user(&store, "u2", "bob");
    let services = services(&store);
    let author = user_id("u1");

    let created = create_article(&services, &author, "post", None).await;

    let err = services
        .article_commands
        .delete_article(&user_id("u2"), created.article.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized { .. }));
    assert_eq!(err.field(), "user");
    assert!(store.articles.lock().unwrap().contains_key(&created.article.id));
}

#[tokio::test]
async fn delete_cascades_to_links_likes_and_comments() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    seed_user(&store, "u2", "bob");
    let services = services(&store);
    let author = user_id("u1");
    let reader = user_id("u2");

    let created = create_article(&services, &author, "post", Some("a, b")).await;
    services
        .like_commands
        .add_like(&reader, created.article.id)
        .await
        .unwrap();
    services
        .comment_commands
        .add_comment(&reader, created.article.id, "nice".into())
        .await
        .unwrap();

    services
        .article_commands
        .delete_article(&author, created.article.id)
        .await
        .unwrap();

    assert!(store.articles.lock().unwrap().is_empty());
    assert!(store.links.lock().unwrap().is_empty());
    assert!(store.likes.lock().unwrap().is_empty());
    assert!(store.comments.lock().unwrap().is_empty());
    // The tag catalog itself is untouched by the cascade.
    assert_eq!(store.tags.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_title_or_body_is_rejected_before_any_write() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);

    let err = services
        .article_commands
        .create_article(
            &user_id("u1"),
            CreateArticleCommand {
                title: "   ".into(),
                description: String::new(),
                body: "body".into(),
                tags: None,
                featured_image: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert!(store.articles.lock().unwrap().is_empty());
}

#[tokio::test]
async fn set_featured_image_is_ownership_gated_and_stores_a_reference() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    seed_user(&store, "u2", "bob");
    let services = services(&store);
    let author = user_id("u1");

    let created = create_article(&services, &author, "post", None).await;

    let err = services
        .article_commands
        .set_featured_image(&user_id("u2"), created.article.id, Bytes::from_static(b"png"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized { .. }));

    let updated = services
        .article_commands
        .set_featured_image(&author, created.article.id, Bytes::from_static(b"png"))
        .await
        .unwrap();
    let reference = updated.article.featured_image.unwrap();
    assert!(reference.starts_with("featured/"));
    assert_eq!(updated.article.updated_at, Some(*NOW));
}

#[tokio::test]
async fn listing_filters_by_tag_and_reports_the_filtered_total() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);
    let author = user_id("u1");

    create_article(&services, &author, "tagged", Some("rust")).await;
    create_article(&services, &author, "untagged", None).await;

    let page = services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: Some("rust".into()),
            title_prefixes: vec![],
            sort: None,
            page: None,
        })
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].article.title, "tagged");
}

#[tokio::test]
async fn every_title_prefix_must_match() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);
    let author = user_id("u1");

    create_article(&services, &author, "banana", None).await;
    create_article(&services, &author, "cherry", None).await;

    // Prefixes are conjunctive: each one narrows the result set.
    let page = services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: None,
            title_prefixes: vec!["banana".into(), "cherry".into()],
            sort: None,
            page: None,
        })
        .await
        .unwrap();
    assert!(page.items.is_empty());

    let page = services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: None,
            title_prefixes: vec!["ban".into(), "banana".into()],
            sort: None,
            page: None,
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].article.title, "banana");
}

#[tokio::test]
async fn listing_sorts_and_paginates() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    let services = services(&store);
    let author = user_id("u1");

    create_article(&services, &author, "banana", None).await;
    create_article(&services, &author, "Apple", None).await;
    create_article(&services, &author, "cherry", None).await;

    let page = services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: None,
            title_prefixes: vec![],
            sort: Some("title".into()),
            page: Some((1, 2)),
        })
        .await
        .unwrap();

    let titles: Vec<&str> = page
        .items
        .iter()
        .map(|item| item.article.title.as_str())
        .collect();
    // Case-insensitive title order, first page of two.
    assert_eq!(titles, vec!["Apple", "banana"]);
    assert_eq!(page.total, 3);

    let second = services
        .article_queries
        .list_articles(ListArticlesQuery {
            tag: None,
            title_prefixes: vec![],
            sort: Some("title".into()),
            page: Some((2, 2)),
        })
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].article.title, "cherry");
}

#[tokio::test]
async fn author_and_liked_listings_resolve_the_username() {
    let store = MemStore::new();
    seed_user(&store, "u1", "alice");
    seed_user(&store, "u2", "bob");
    let services = services(&store);
    let alice = user_id("u1");
    let bob = user_id("u2");

    let by_alice = create_article(&services, &alice, "hers", None).await;
    create_article(&services, &bob, "his", None).await;
    services
        .like_commands
        .add_like(&bob, by_alice.article.id)
        .await
        .unwrap();

    let authored = services
        .article_queries
        .list_by_author("alice", None)
        .await
        .unwrap();
    assert_eq!(authored.len(), 1);
    assert_eq!(authored[0].article.title, "hers");

    let liked = services
        .article_queries
        .list_liked_by("bob", None)
        .await
        .unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].article.title, "hers");

    let err = services
        .article_queries
        .list_by_author("nobody", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound { .. }));
    assert_eq!(err.field(), "user");
}
