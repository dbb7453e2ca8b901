use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult, mapping},
    domain::{article::ArticleKind, locale::Locale},
};

pub struct ListArticlesQuery {
    pub kind: ArticleKind,
    pub locale: Locale,
}

impl ArticleQueryService {
    /// Newest first. A failing source yields an empty list, never an error.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self
            .content
            .fetch_collection(query.kind, query.locale)
            .await;

        let articles = mapping::to_articles(records, Some(query.kind));
        tracing::debug!(
            kind = %query.kind,
            locale = %query.locale,
            count = articles.len(),
            "listed articles"
        );
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
