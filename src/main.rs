// src/main.rs
use anyhow::Result;
use ideashare_core::application::{
    ports::{ClockPort, ImageStorePort},
    services::{ApplicationServices, Repositories},
};
use ideashare_core::config::AppConfig;
use ideashare_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    comment::CommentRepository,
    like::LikeRepository,
    tag::{ArticleTagRepository, TagRepository},
    user::UserRepository,
};
use ideashare_core::infrastructure::{
    database,
    images::FsImageStore,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleTagRepository,
        PostgresArticleWriteRepository, PostgresCommentRepository, PostgresLikeRepository,
        PostgresTagRepository, PostgresUserRepository,
    },
    time::SystemClock,
};
use ideashare_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let article_write: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let tags: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let article_tags: Arc<dyn ArticleTagRepository> =
        Arc::new(PostgresArticleTagRepository::new(pool.clone()));
    let likes: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(pool.clone()));
    let comments: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));

    let images: Arc<ImageStorePort> = Arc::new(FsImageStore::new(config.image_dir().clone()));
    let clock: Arc<ClockPort> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        Repositories {
            article_write,
            article_read,
            tags,
            article_tags,
            likes,
            comments,
            users,
        },
        images,
        clock,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            tracing::warn!("failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(_) => {
                tracing::warn!("failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
