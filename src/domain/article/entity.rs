// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleSlug;
use chrono::{DateTime, Utc};

/// A blog post or news item as shown on the site.
///
/// `topic` is only set for blog posts and `location` only for news items.
/// `content` is rendered HTML and is only present for single-article reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub slug: ArticleSlug,
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub content: Option<String>,
    pub topic: Option<String>,
    pub location: Option<String>,
}

/// Orders articles newest first. The sort is stable, so articles sharing a
/// date keep their source order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(slug: &str, day: u32) -> Article {
        Article {
            slug: ArticleSlug::new(slug).unwrap(),
            date: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
            title: slug.to_uppercase(),
            description: String::new(),
            content: None,
            topic: None,
            location: None,
        }
    }

    fn slugs(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.slug.as_str()).collect()
    }

    #[test]
    fn newest_article_comes_first() {
        let mut articles = vec![article("a", 1), article("b", 3), article("c", 2)];
        sort_newest_first(&mut articles);
        assert_eq!(slugs(&articles), ["b", "c", "a"]);
    }

    #[test]
    fn equal_dates_keep_source_order() {
        let mut articles = vec![
            article("first", 5),
            article("older", 1),
            article("second", 5),
            article("third", 5),
        ];
        sort_newest_first(&mut articles);
        assert_eq!(slugs(&articles), ["first", "second", "third", "older"]);
        assert!(articles.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
