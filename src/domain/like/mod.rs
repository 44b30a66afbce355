// src/domain/like/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Like, NewLike};
pub use repository::LikeRepository;
