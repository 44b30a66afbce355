// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentBody, CommentId, CommentWithAuthor, ModerationStatus, NewComment};
pub use repository::CommentRepository;
