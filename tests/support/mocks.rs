// tests/support/mocks.rs
//! In-memory repository doubles backed by one shared `MemStore`, so a
//! test can wire the real application services against them and then
//! inspect the raw rows afterwards.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use ideashare_core::application::ApplicationResult;
use ideashare_core::application::ports::image::{ImageKind, ImageStore};
use ideashare_core::application::ports::time::Clock;
use ideashare_core::domain::article::{
    Article, ArticleChanges, ArticleDetails, ArticleId, ArticleListFilter, ArticleReadRepository,
    ArticleSort, ArticleWriteRepository, NewArticle,
};
use ideashare_core::domain::comment::{
    Comment, CommentId, CommentRepository, CommentWithAuthor, ModerationStatus, NewComment,
};
use ideashare_core::domain::errors::{DomainError, DomainResult};
use ideashare_core::domain::like::{Like, LikeRepository, NewLike};
use ideashare_core::domain::tag::{
    ArticleTag, ArticleTagRepository, InsertOutcome, Tag, TagId, TagRepository,
};
use ideashare_core::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate, Username};

#[derive(Default)]
pub struct MemStore {
    pub users: Mutex<HashMap<String, User>>,
    pub articles: Mutex<HashMap<i64, Article>>,
    next_article_id: AtomicI64,
    pub tags: Mutex<HashMap<String, Tag>>,
    /// Association rows paired with an insertion sequence number, so
    /// tests can assert that a surviving link kept its original row.
    pub links: Mutex<Vec<(u64, ArticleTag)>>,
    next_link_seq: AtomicU64,
    pub likes: Mutex<HashMap<(String, i64), Like>>,
    pub comments: Mutex<HashMap<i64, Comment>>,
    next_comment_id: AtomicI64,
}

impl MemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn link_seq(&self, article_id: i64, tag: &str) -> Option<u64> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|(_, link)| i64::from(link.article_id) == article_id && link.tag_id.as_str() == tag)
            .map(|(seq, _)| *seq)
    }

    pub fn link_tags(&self, article_id: i64) -> Vec<String> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, link)| i64::from(link.article_id) == article_id)
            .map(|(_, link)| link.tag_id.as_str().to_string())
            .collect()
    }

    fn hydrate(&self, article: Article) -> DomainResult<ArticleDetails> {
        let author = self
            .users
            .lock()
            .unwrap()
            .get(article.author_id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound("author row missing".into()))?;

        let id: i64 = article.id.into();
        let tags = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, link)| i64::from(link.article_id) == id)
            .map(|(_, link)| link.tag_id.clone())
            .collect();
        let likes = self
            .likes
            .lock()
            .unwrap()
            .values()
            .filter(|like| i64::from(like.article_id) == id)
            .cloned()
            .collect();

        Ok(ArticleDetails {
            article,
            author,
            tags,
            likes,
        })
    }
}

pub struct MemUserRepo(pub Arc<MemStore>);

#[async_trait]
impl UserRepository for MemUserRepo {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let mut users = self.0.users.lock().unwrap();
        if users
            .values()
            .any(|existing| existing.username == user.username)
        {
            return Err(DomainError::Conflict("username taken".into()));
        }
        let stored = User {
            id: user.id.clone(),
            username: user.username,
            display_name: user.display_name,
            profile_image: None,
            created_at: user.created_at,
        };
        users.insert(user.id.as_str().to_string(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.username == *username)
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<Option<User>> {
        let mut users = self.0.users.lock().unwrap();
        let Some(user) = users.get_mut(update.id.as_str()) else {
            return Ok(None);
        };
        if let Some(display_name) = update.display_name {
            user.display_name = display_name;
        }
        if let Some(profile_image) = update.profile_image {
            user.profile_image = Some(profile_image);
        }
        Ok(Some(user.clone()))
    }
}

pub struct MemArticleWriteRepo(pub Arc<MemStore>);

#[async_trait]
impl ArticleWriteRepository for MemArticleWriteRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.0.next_article_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            description: article.description,
            body: article.body,
            featured_image: article.featured_image,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: None,
        };
        self.0.articles.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, changes: ArticleChanges) -> DomainResult<Option<Article>> {
        let mut articles = self.0.articles.lock().unwrap();
        let Some(article) = articles.get_mut(&i64::from(changes.id)) else {
            return Ok(None);
        };
        article.title = changes.title;
        article.description = changes.description;
        article.body = changes.body;
        if let Some(reference) = changes.featured_image {
            article.featured_image = Some(reference);
        }
        article.updated_at = Some(changes.updated_at);
        Ok(Some(article.clone()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let raw: i64 = id.into();
        let removed = self.0.articles.lock().unwrap().remove(&raw).is_some();
        if removed {
            // Mirror the FK cascades of the real schema.
            self.0
                .links
                .lock()
                .unwrap()
                .retain(|(_, link)| i64::from(link.article_id) != raw);
            self.0
                .likes
                .lock()
                .unwrap()
                .retain(|(_, article_id), _| *article_id != raw);
            self.0
                .comments
                .lock()
                .unwrap()
                .retain(|_, comment| i64::from(comment.article_id) != raw);
        }
        Ok(u64::from(removed))
    }
}

pub struct MemArticleReadRepo(pub Arc<MemStore>);

#[async_trait]
impl ArticleReadRepository for MemArticleReadRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .0
            .articles
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned())
    }

    async fn find_details(&self, id: ArticleId) -> DomainResult<Option<ArticleDetails>> {
        let article = self
            .0
            .articles
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned();
        match article {
            Some(article) => Ok(Some(self.0.hydrate(article)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<ArticleDetails>> {
        let mut articles: Vec<Article> =
            self.0.articles.lock().unwrap().values().cloned().collect();

        if let Some(tag) = &filter.tag {
            let links = self.0.links.lock().unwrap();
            articles.retain(|article| {
                links.iter().any(|(_, link)| {
                    link.article_id == article.id && link.tag_id == *tag
                })
            });
        }
        if !filter.title_prefixes.is_empty() {
            articles.retain(|article| {
                let title = article.title.as_str().to_lowercase();
                filter
                    .title_prefixes
                    .iter()
                    .all(|prefix| title.starts_with(&prefix.to_lowercase()))
            });
        }
        if let Some(author_id) = &filter.author_id {
            articles.retain(|article| article.author_id == *author_id);
        }
        if let Some(liked_by) = &filter.liked_by {
            let likes = self.0.likes.lock().unwrap();
            articles.retain(|article| {
                likes.contains_key(&(liked_by.as_str().to_string(), article.id.into()))
            });
        }

        match filter.sort {
            ArticleSort::TitleAsc => {
                articles.sort_by_key(|article| article.title.as_str().to_lowercase());
            }
            ArticleSort::TitleDesc => {
                articles.sort_by_key(|article| article.title.as_str().to_lowercase());
                articles.reverse();
            }
            ArticleSort::DateAsc => articles.sort_by_key(|article| article.created_at),
            ArticleSort::DateDesc => {
                articles.sort_by_key(|article| article.created_at);
                articles.reverse();
            }
            ArticleSort::Unsorted => articles.sort_by_key(|article| i64::from(article.id)),
        }

        if let Some(page) = filter.page {
            articles = articles
                .into_iter()
                .skip(page.offset as usize)
                .take(page.limit as usize)
                .collect();
        }

        articles
            .into_iter()
            .map(|article| self.0.hydrate(article))
            .collect()
    }

    async fn count(&self, tag: Option<&TagId>) -> DomainResult<u64> {
        let articles = self.0.articles.lock().unwrap();
        match tag {
            None => Ok(articles.len() as u64),
            Some(tag) => {
                let links = self.0.links.lock().unwrap();
                Ok(articles
                    .values()
                    .filter(|article| {
                        links.iter().any(|(_, link)| {
                            link.article_id == article.id && link.tag_id == *tag
                        })
                    })
                    .count() as u64)
            }
        }
    }
}

pub struct MemTagRepo(pub Arc<MemStore>);

#[async_trait]
impl TagRepository for MemTagRepo {
    async fn find(&self, id: &TagId) -> DomainResult<Option<Tag>> {
        Ok(self.0.tags.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn try_insert(&self, id: &TagId) -> DomainResult<InsertOutcome<Tag>> {
        let mut tags = self.0.tags.lock().unwrap();
        if let Some(existing) = tags.get(id.as_str()) {
            return Ok(InsertOutcome::AlreadyExists(existing.clone()));
        }
        let tag = Tag { id: id.clone() };
        tags.insert(id.as_str().to_string(), tag.clone());
        Ok(InsertOutcome::Inserted(tag))
    }
}

pub struct MemArticleTagRepo(pub Arc<MemStore>);

#[async_trait]
impl ArticleTagRepository for MemArticleTagRepo {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleTag>> {
        Ok(self
            .0
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, link)| link.article_id == article_id)
            .map(|(_, link)| link.clone())
            .collect())
    }

    async fn try_insert(&self, link: ArticleTag) -> DomainResult<InsertOutcome<ArticleTag>> {
        let mut links = self.0.links.lock().unwrap();
        if links.iter().any(|(_, existing)| *existing == link) {
            return Ok(InsertOutcome::AlreadyExists(link));
        }
        let seq = self.0.next_link_seq.fetch_add(1, Ordering::SeqCst) + 1;
        links.push((seq, link.clone()));
        Ok(InsertOutcome::Inserted(link))
    }

    async fn delete(&self, article_id: ArticleId, tag_id: &TagId) -> DomainResult<()> {
        self.0
            .links
            .lock()
            .unwrap()
            .retain(|(_, link)| !(link.article_id == article_id && link.tag_id == *tag_id));
        Ok(())
    }
}

pub struct MemLikeRepo(pub Arc<MemStore>);

#[async_trait]
impl LikeRepository for MemLikeRepo {
    async fn find(&self, user_id: &UserId, article_id: ArticleId) -> DomainResult<Option<Like>> {
        Ok(self
            .0
            .likes
            .lock()
            .unwrap()
            .get(&(user_id.as_str().to_string(), article_id.into()))
            .cloned())
    }

    async fn try_insert(&self, like: NewLike) -> DomainResult<InsertOutcome<Like>> {
        let key = (like.user_id.as_str().to_string(), like.article_id.into());
        let mut likes = self.0.likes.lock().unwrap();
        if let Some(existing) = likes.get(&key) {
            return Ok(InsertOutcome::AlreadyExists(existing.clone()));
        }
        let stored = Like {
            user_id: like.user_id,
            article_id: like.article_id,
            created_at: like.created_at,
        };
        likes.insert(key, stored.clone());
        Ok(InsertOutcome::Inserted(stored))
    }

    async fn delete(&self, user_id: &UserId, article_id: ArticleId) -> DomainResult<u64> {
        let removed = self
            .0
            .likes
            .lock()
            .unwrap()
            .remove(&(user_id.as_str().to_string(), article_id.into()))
            .is_some();
        Ok(u64::from(removed))
    }
}

pub struct MemCommentRepo(pub Arc<MemStore>);

impl MemCommentRepo {
    fn with_author(&self, comment: Comment) -> DomainResult<CommentWithAuthor> {
        let author = self
            .0
            .users
            .lock()
            .unwrap()
            .get(comment.author_id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound("author row missing".into()))?;
        Ok(CommentWithAuthor { comment, author })
    }
}

#[async_trait]
impl CommentRepository for MemCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let id = self.0.next_comment_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Comment {
            id: CommentId::new(id)?,
            body: comment.body,
            author_id: comment.author_id,
            article_id: comment.article_id,
            posted_at: comment.posted_at,
            status: ModerationStatus::Pending,
        };
        self.0.comments.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .0
            .comments
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned())
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let mut comments: Vec<Comment> = self
            .0
            .comments
            .lock()
            .unwrap()
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| (comment.posted_at, i64::from(comment.id)));
        comments
            .into_iter()
            .map(|comment| self.with_author(comment))
            .collect()
    }

    async fn list_for_author_articles(
        &self,
        author_id: &UserId,
    ) -> DomainResult<Vec<CommentWithAuthor>> {
        let owned: Vec<i64> = self
            .0
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| article.author_id == *author_id)
            .map(|article| article.id.into())
            .collect();
        let mut comments: Vec<Comment> = self
            .0
            .comments
            .lock()
            .unwrap()
            .values()
            .filter(|comment| owned.contains(&i64::from(comment.article_id)))
            .cloned()
            .collect();
        comments.sort_by_key(|comment| {
            (
                comment.status != ModerationStatus::Pending,
                comment.posted_at,
                i64::from(comment.id),
            )
        });
        comments
            .into_iter()
            .map(|comment| self.with_author(comment))
            .collect()
    }

    async fn set_moderation(
        &self,
        id: CommentId,
        status: ModerationStatus,
    ) -> DomainResult<Option<Comment>> {
        let mut comments = self.0.comments.lock().unwrap();
        let Some(comment) = comments.get_mut(&i64::from(id)) else {
            return Ok(None);
        };
        comment.status = status;
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<u64> {
        let removed = self
            .0
            .comments
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .is_some();
        Ok(u64::from(removed))
    }
}

/// Deterministic clock; every "now" in a test comes out identical.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Stores nothing; returns a reference derived from the payload so
/// tests can assert the article picked it up.
pub struct MemoryImageStore;

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn store(&self, data: Bytes, kind: ImageKind) -> ApplicationResult<String> {
        let prefix = match kind {
            ImageKind::FeaturedImage => "featured",
            ImageKind::ProfileImage => "profile",
        };
        Ok(format!("{prefix}/{}", blake3::hash(&data).to_hex()))
    }
}
