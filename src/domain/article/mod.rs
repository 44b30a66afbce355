// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Article, ArticleChanges, ArticleDetails, ArticleListFilter, ArticleSort, NewArticle,
    PageRequest,
};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleDescription, ArticleId, ArticleTitle};
