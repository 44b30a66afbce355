// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub display_name: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub username: Username,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub display_name: Option<String>,
    pub profile_image: Option<String>,
}
