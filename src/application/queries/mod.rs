// src/application/queries/mod.rs
pub mod articles;
pub mod comments;
pub mod users;
