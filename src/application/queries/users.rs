// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserRepository, Username},
};

pub struct UserQueryService {
    users: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn get_by_username(&self, username: &str) -> ApplicationResult<UserDto> {
        let username = Username::new(username)?;
        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", "such user does not exist"))?;

        Ok(user.into())
    }
}
