// src/domain/mod.rs
pub mod article;
pub mod comment;
pub mod errors;
pub mod like;
pub mod tag;
pub mod user;
