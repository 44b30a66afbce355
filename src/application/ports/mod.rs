// src/application/ports/mod.rs
pub mod image;
pub mod time;

pub type ClockPort = dyn time::Clock;
pub type ImageStorePort = dyn image::ImageStore;
