// src/infrastructure/mod.rs
pub mod database;
pub mod images;
pub mod repositories;
pub mod time;
