use super::{ArticleQueryService, ListArticlesQuery};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::ArticleKind, locale::Locale},
};

pub struct ListArticlesByTopicQuery {
    pub topic: String,
    pub locale: Locale,
}

impl ArticleQueryService {
    /// Distinct blog topics, in order of first appearance (newest first).
    pub async fn list_topics(&self, locale: Locale) -> ApplicationResult<Vec<String>> {
        let blogs = self
            .list_articles(ListArticlesQuery {
                kind: ArticleKind::Blog,
                locale,
            })
            .await?;
        Ok(distinct_topics(&blogs))
    }

    pub async fn list_blogs_by_topic(
        &self,
        query: ListArticlesByTopicQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let blogs = self
            .list_articles(ListArticlesQuery {
                kind: ArticleKind::Blog,
                locale: query.locale,
            })
            .await?;
        Ok(blogs
            .into_iter()
            .filter(|article| article.topic.as_deref() == Some(query.topic.as_str()))
            .collect())
    }
}

pub(super) fn distinct_topics(articles: &[ArticleDto]) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();
    for topic in articles.iter().filter_map(|a| a.topic.as_ref()) {
        if !topics.contains(topic) {
            topics.push(topic.clone());
        }
    }
    topics
}
