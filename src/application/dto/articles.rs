use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub slug: String,
    #[serde(with = "serde_time")]
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            slug: article.slug.into_inner(),
            date: article.date,
            title: article.title,
            description: article.description,
            content: article.content,
            topic: article.topic,
            location: article.location,
        }
    }
}
