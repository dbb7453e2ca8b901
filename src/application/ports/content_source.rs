// src/application/ports/content_source.rs
use crate::application::ports::records::{RawAboutUsPage, RawArticle};
use crate::domain::{
    article::{ArticleKind, ArticleSlug},
    locale::Locale,
};
use async_trait::async_trait;

/// Read-only access to site content.
///
/// Implementations absorb their own failures: transport errors, non-success
/// responses and undecodable payloads are logged and surface as an empty
/// collection or `None`. Callers only ever see "content" or "no content".
///
/// `draft` is the request's preview flag. When set, unpublished versions
/// are requested instead of published ones.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_collection(&self, kind: ArticleKind, locale: Locale) -> Vec<RawArticle>;

    async fn fetch_item_by_slug(
        &self,
        kind: ArticleKind,
        slug: &ArticleSlug,
        locale: Locale,
        draft: bool,
    ) -> Option<RawArticle>;

    /// The About Us singleton with every nested relation populated.
    async fn fetch_singleton(&self, locale: Locale, draft: bool) -> Option<RawAboutUsPage>;
}
