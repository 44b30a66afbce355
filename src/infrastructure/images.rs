// src/infrastructure/images.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::image::{ImageKind, ImageStore};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

/// Filesystem-backed upload store. Files are content-addressed by their
/// blake3 hash, so re-uploading identical bytes is idempotent and the
/// returned reference never collides.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn subdir(kind: ImageKind) -> &'static str {
        match kind {
            ImageKind::FeaturedImage => "featured",
            ImageKind::ProfileImage => "profile",
        }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, data: Bytes, kind: ImageKind) -> ApplicationResult<String> {
        if data.is_empty() {
            return Err(ApplicationError::validation(
                "image",
                "uploaded image is empty",
            ));
        }

        let hash = blake3::hash(&data).to_hex();
        let reference = format!("{}/{hash}", Self::subdir(kind));
        let path = self.root.join(&reference);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                ApplicationError::persistence("image", format!("couldn't create image dir: {err}"))
            })?;
        }

        tokio::fs::write(&path, &data).await.map_err(|err| {
            ApplicationError::persistence("image", format!("couldn't store image: {err}"))
        })?;

        Ok(reference)
    }
}
