use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::value_objects::{UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new profile row. A taken username surfaces as
    /// `DomainError::Conflict` via the adapter's constraint mapping.
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
    /// Returns the updated row, or `None` when no row was affected.
    async fn update(&self, update: UserUpdate) -> DomainResult<Option<User>>;
}
