// src/presentation/http/extractors.rs
use crate::domain::user::UserId;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

const USER_ID_HEADER: &str = "x-user-id";

/// The identity resolved by the upstream auth collaborator. The core
/// never authenticates; it receives an opaque id and compares it for
/// ownership.
#[derive(Debug, Clone)]
pub struct RequestingUser(pub UserId);

impl<S> FromRequestParts<S> for RequestingUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| HttpError::unauthenticated("missing resolved user identity"))?;

        let user_id = UserId::new(header)
            .map_err(|_| HttpError::unauthenticated("empty resolved user identity"))?;

        Ok(Self(user_id))
    }
}
