// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{ClockPort, ImageStorePort},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        tag::TagReconciler,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) reconciler: Arc<TagReconciler>,
    pub(super) images: Arc<ImageStorePort>,
    pub(super) clock: Arc<ClockPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        reconciler: Arc<TagReconciler>,
        images: Arc<ImageStorePort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            reconciler,
            images,
            clock,
        }
    }
}
