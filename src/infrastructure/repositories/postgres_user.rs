// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_COLUMNS: &str = "id, username, display_name, profile_image, created_at";

#[derive(Debug, FromRow)]
struct UserRow {
    id: String,
    username: String,
    display_name: String,
    profile_image: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            display_name: row.display_name,
            profile_image: row.profile_image,
            created_at: row.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, username, display_name, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, display_name, profile_image, created_at",
        )
        .bind(user.id.as_str())
        .bind(user.username.as_str())
        .bind(&user.display_name)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<Option<User>> {
        if update.display_name.is_none() && update.profile_image.is_none() {
            return self.find_by_id(&update.id).await;
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut first = true;

        if let Some(display_name) = update.display_name {
            builder.push("display_name = ");
            builder.push_bind(display_name);
            first = false;
        }

        if let Some(profile_image) = update.profile_image {
            if !first {
                builder.push(", ");
            }
            builder.push("profile_image = ");
            builder.push_bind(profile_image);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(update.id.as_str().to_string());
        builder.push(" RETURNING ");
        builder.push(USER_COLUMNS);

        let maybe_row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        maybe_row.map(User::try_from).transpose()
    }
}
