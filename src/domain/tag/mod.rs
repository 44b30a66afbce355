// src/domain/tag/mod.rs
pub mod entity;
pub mod reconcile;
pub mod repository;
pub mod service;

pub use entity::{ArticleTag, Tag, TagId};
pub use reconcile::{TagDelta, parse_tag_list};
pub use repository::{ArticleTagRepository, InsertOutcome, TagRepository};
pub use service::{TagCatalog, TagReconciler};
