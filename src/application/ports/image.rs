// src/application/ports/image.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Which slot the upload is destined for; the collaborator picks target
/// size and format per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    FeaturedImage,
    ProfileImage,
}

/// Upload collaborator boundary: raw bytes in, stored filename reference
/// out. Resizing and format conversion happen behind this port; the core
/// stores only the returned reference string.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, data: Bytes, kind: ImageKind) -> ApplicationResult<String>;
}
