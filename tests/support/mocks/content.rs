// tests/support/mocks/content.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use corporate_site::application::ports::content_source::ContentSource;
use corporate_site::application::ports::records::{RawAboutUsPage, RawArticle};
use corporate_site::domain::article::{ArticleKind, ArticleSlug};
use corporate_site::domain::locale::Locale;

/* -------------------------------- ContentSource -------------------------------- */

/// 固定レコードを返すコンテンツソース。受け取った draft フラグを記録する。
#[derive(Default)]
pub struct MockContentSource {
    published: Vec<(ArticleKind, Locale, RawArticle)>,
    drafts: Vec<(ArticleKind, Locale, RawArticle)>,
    about: HashMap<Locale, RawAboutUsPage>,
    draft_flags: Mutex<Vec<bool>>,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(mut self, kind: ArticleKind, locale: Locale, record: RawArticle) -> Self {
        self.published.push((kind, locale, record));
        self
    }

    /// 下書きモードでのみ取得できる記事
    pub fn with_draft(mut self, kind: ArticleKind, locale: Locale, record: RawArticle) -> Self {
        self.drafts.push((kind, locale, record));
        self
    }

    pub fn with_about(mut self, locale: Locale, page: RawAboutUsPage) -> Self {
        self.about.insert(locale, page);
        self
    }

    /// これまでに渡された draft フラグ
    pub fn draft_flags(&self) -> Vec<bool> {
        self.draft_flags.lock().unwrap().clone()
    }

    fn record_flag(&self, draft: bool) {
        self.draft_flags.lock().unwrap().push(draft);
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch_collection(&self, kind: ArticleKind, locale: Locale) -> Vec<RawArticle> {
        self.published
            .iter()
            .filter(|(k, l, _)| *k == kind && *l == locale)
            .map(|(_, _, record)| record.clone())
            .collect()
    }

    async fn fetch_item_by_slug(
        &self,
        kind: ArticleKind,
        slug: &ArticleSlug,
        locale: Locale,
        draft: bool,
    ) -> Option<RawArticle> {
        self.record_flag(draft);
        let drafts = if draft { self.drafts.as_slice() } else { &[] };
        self.published
            .iter()
            .chain(drafts)
            .find(|(k, l, record)| {
                *k == kind && *l == locale && record.slug.as_deref() == Some(slug.as_str())
            })
            .map(|(_, _, record)| record.clone())
    }

    async fn fetch_singleton(&self, locale: Locale, draft: bool) -> Option<RawAboutUsPage> {
        self.record_flag(draft);
        self.about.get(&locale).cloned()
    }
}
