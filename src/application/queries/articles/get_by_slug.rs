use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        mapping,
    },
    domain::{
        article::{ArticleKind, ArticleSlug},
        locale::Locale,
    },
};

pub struct GetArticleBySlugQuery {
    pub kind: ArticleKind,
    pub slug: String,
    pub locale: Locale,
    pub draft: bool,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        let record = self
            .content
            .fetch_item_by_slug(query.kind, &slug, query.locale, query.draft)
            .await
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        mapping::to_article_detail(record, Some(query.kind))
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
