// src/application/commands/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, ImageStorePort, image::ImageKind},
    },
    domain::{
        errors::DomainError,
        user::{NewUser, UserId, UserRepository, UserUpdate, Username},
    },
};
use bytes::Bytes;

pub struct RegisterUserCommand {
    pub username: String,
    pub display_name: String,
}

pub struct UpdateProfileCommand {
    pub display_name: Option<String>,
    pub profile_image: Option<Bytes>,
}

/// Profile management only. Credentials, tokens, and sessions live in
/// the external identity collaborator; this service never sees them.
pub struct UserCommandService {
    users: Arc<dyn UserRepository>,
    images: Arc<ImageStorePort>,
    clock: Arc<ClockPort>,
}

impl UserCommandService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        images: Arc<ImageStorePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            users,
            images,
            clock,
        }
    }

    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let id = UserId::new(uuid::Uuid::new_v4().to_string())?;

        let user = self
            .users
            .insert(NewUser {
                id,
                username,
                display_name: command.display_name,
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => {
                    ApplicationError::conflict("username", "username already exists")
                }
                other => other.into(),
            })?;

        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        user_id: &UserId,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let profile_image = match command.profile_image {
            Some(data) => Some(self.images.store(data, ImageKind::ProfileImage).await?),
            None => None,
        };

        let updated = self
            .users
            .update(UserUpdate {
                id: user_id.clone(),
                display_name: command.display_name,
                profile_image,
            })
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", "such user does not exist"))?;

        Ok(updated.into())
    }
}
