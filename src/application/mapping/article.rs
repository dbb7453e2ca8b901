// src/application/mapping/article.rs
use crate::application::mapping::date::parse_content_date;
use crate::application::ports::records::RawArticle;
use crate::domain::article::{Article, ArticleKind, ArticleSlug, sort_newest_first};

const RICH_TEXT_COMPONENT: &str = "shared.rich-text";

/// Maps one raw record. `kind` selects the kind-specific field (`topic` for
/// blog, `location` for news); with no kind neither is set.
///
/// Records without a slug or a usable date are rejected.
pub fn to_article(record: RawArticle, kind: Option<ArticleKind>) -> Option<Article> {
    let Some(slug) = record.slug.clone().and_then(|s| ArticleSlug::new(s).ok()) else {
        tracing::warn!(kind = ?kind, title = ?record.title, "dropping article without slug");
        return None;
    };

    let Some(date) = article_date(&record) else {
        tracing::warn!(kind = ?kind, slug = %slug, "dropping article without a usable date");
        return None;
    };

    let content = record.content.clone().or_else(|| rich_text_body(&record));
    let RawArticle {
        title,
        description,
        topic,
        location,
        ..
    } = record;

    Some(Article {
        slug,
        date,
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        content,
        topic: topic.filter(|_| kind == Some(ArticleKind::Blog)),
        location: location.filter(|_| kind == Some(ArticleKind::News)),
    })
}

/// Maps a single-article read. The body is always present, empty when the
/// record has neither rendered content nor a rich-text block.
pub fn to_article_detail(record: RawArticle, kind: Option<ArticleKind>) -> Option<Article> {
    to_article(record, kind).map(|mut article| {
        article.content.get_or_insert_with(String::new);
        article
    })
}

/// Maps a collection and orders it newest first.
pub fn to_articles(records: Vec<RawArticle>, kind: Option<ArticleKind>) -> Vec<Article> {
    let mut articles: Vec<Article> = records
        .into_iter()
        .filter_map(|record| to_article(record, kind))
        .collect();
    sort_newest_first(&mut articles);
    articles
}

// Drafts carry no publishedAt, so fall back to the edit timestamps.
fn article_date(record: &RawArticle) -> Option<chrono::DateTime<chrono::Utc>> {
    [
        &record.date,
        &record.published_at,
        &record.updated_at,
        &record.created_at,
    ]
    .into_iter()
    .flatten()
    .find_map(|value| parse_content_date(value))
}

fn rich_text_body(record: &RawArticle) -> Option<String> {
    record
        .blocks
        .iter()
        .find(|block| block.component.as_deref() == Some(RICH_TEXT_COMPONENT))
        .map(|block| block.body.clone().unwrap_or_default())
}
