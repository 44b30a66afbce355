// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailsDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListFilter, ArticleSort, PageRequest},
        tag::TagId,
        user::Username,
    },
};

pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub title_prefixes: Vec<String>,
    pub sort: Option<String>,
    /// 1-based page number and page size; both or neither.
    pub page: Option<(u32, u32)>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDetailsDto>> {
        let tag = query.tag.map(TagId::new).transpose()?;

        let page = query.page.map(|(page, per_page)| PageRequest {
            offset: per_page.saturating_mul(page.saturating_sub(1)),
            limit: per_page,
        });

        let filter = ArticleListFilter {
            tag: tag.clone(),
            title_prefixes: query.title_prefixes,
            author_id: None,
            liked_by: None,
            sort: ArticleSort::from_key(query.sort.as_deref()),
            page,
        };

        let items = self.read_repo.list(&filter).await?;
        let total = self.read_repo.count(tag.as_ref()).await?;

        Ok(Page::new(items.into_iter().map(Into::into).collect(), total))
    }

    pub async fn list_by_author(
        &self,
        username: &str,
        sort: Option<&str>,
    ) -> ApplicationResult<Vec<ArticleDetailsDto>> {
        let user = self.resolve_user(username).await?;
        let filter = ArticleListFilter {
            author_id: Some(user.id),
            sort: ArticleSort::from_key(sort),
            ..ArticleListFilter::default()
        };

        let items = self.read_repo.list(&filter).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn list_liked_by(
        &self,
        username: &str,
        sort: Option<&str>,
    ) -> ApplicationResult<Vec<ArticleDetailsDto>> {
        let user = self.resolve_user(username).await?;
        let filter = ArticleListFilter {
            liked_by: Some(user.id),
            sort: ArticleSort::from_key(sort),
            ..ArticleListFilter::default()
        };

        let items = self.read_repo.list(&filter).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    async fn resolve_user(&self, username: &str) -> ApplicationResult<crate::domain::user::User> {
        let username = Username::new(username)?;
        self.users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user", "such user does not exist"))
    }
}
