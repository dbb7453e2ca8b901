// src/infrastructure/strapi/source.rs
use async_trait::async_trait;

use super::{ContentEndpoints, StrapiClient};
use crate::{
    application::ports::{
        content_source::ContentSource,
        records::{RawAboutUsPage, RawArticle},
    },
    domain::{
        article::{ArticleKind, ArticleSlug},
        locale::Locale,
    },
    infrastructure::error::{SourceError, SourceResult},
};

const PAGE_SIZE: &str = "100";

/// Every relation the About Us view renders, fetched in one request.
const ABOUT_US_POPULATE: &[(&str, &str)] = &[
    ("populate[heroImage]", "true"),
    ("populate[allSections][populate][section]", "true"),
    ("populate[sectionOnePlayImage]", "true"),
    ("populate[sectionOnePDF]", "true"),
    ("populate[aboutUsSectionTwoCards][populate]", "*"),
    ("populate[cardsBelowOurValues][populate]", "*"),
    ("populate[allOurValues][populate]", "*"),
    ("populate[ourValuesImage]", "true"),
    ("populate[ourValuesLink]", "true"),
    ("populate[messageFromCEOLink]", "true"),
    ("populate[ourLeadershipImage]", "true"),
];

const fn status(draft: bool) -> &'static str {
    if draft { "draft" } else { "published" }
}

pub struct StrapiContentSource {
    client: StrapiClient,
    endpoints: ContentEndpoints,
}

impl StrapiContentSource {
    pub fn new(client: StrapiClient, endpoints: ContentEndpoints) -> Self {
        Self { client, endpoints }
    }

    async fn collection(&self, kind: ArticleKind, locale: Locale) -> SourceResult<Vec<RawArticle>> {
        let url = self.client.url(
            self.endpoints.collection(kind),
            &[
                ("locale", locale.code()),
                ("status", status(false)),
                ("pagination[pageSize]", PAGE_SIZE),
            ],
        )?;
        self.client.get_collection(url).await
    }

    async fn item_by_slug(
        &self,
        kind: ArticleKind,
        slug: &ArticleSlug,
        locale: Locale,
        draft: bool,
    ) -> SourceResult<Option<RawArticle>> {
        let url = self.client.url(
            self.endpoints.collection(kind),
            &[
                ("filters[slug][$eq]", slug.as_str()),
                ("locale", locale.code()),
                ("status", status(draft)),
                ("populate", "*"),
            ],
        )?;
        let items: Vec<RawArticle> = self.client.get_collection(url).await?;
        Ok(items.into_iter().next())
    }

    async fn singleton(&self, locale: Locale, draft: bool) -> SourceResult<Option<RawAboutUsPage>> {
        let mut params = vec![("locale", locale.code()), ("status", status(draft))];
        params.extend_from_slice(ABOUT_US_POPULATE);
        let url = self.client.url(&self.endpoints.about_us, &params)?;
        self.client.get_single(url).await
    }
}

fn log_failure(err: &SourceError, what: &str, kind: Option<ArticleKind>, locale: Locale) {
    if err.is_not_found() {
        tracing::debug!(error = %err, what, ?kind, %locale, "cms content absent");
    } else {
        tracing::error!(error = %err, what, ?kind, %locale, "failed to fetch cms content");
    }
}

#[async_trait]
impl ContentSource for StrapiContentSource {
    async fn fetch_collection(&self, kind: ArticleKind, locale: Locale) -> Vec<RawArticle> {
        self.collection(kind, locale).await.unwrap_or_else(|err| {
            log_failure(&err, "collection", Some(kind), locale);
            Vec::new()
        })
    }

    async fn fetch_item_by_slug(
        &self,
        kind: ArticleKind,
        slug: &ArticleSlug,
        locale: Locale,
        draft: bool,
    ) -> Option<RawArticle> {
        self.item_by_slug(kind, slug, locale, draft)
            .await
            .unwrap_or_else(|err| {
                log_failure(&err, "item", Some(kind), locale);
                None
            })
    }

    async fn fetch_singleton(&self, locale: Locale, draft: bool) -> Option<RawAboutUsPage> {
        self.singleton(locale, draft).await.unwrap_or_else(|err| {
            log_failure(&err, "about-us", None, locale);
            None
        })
    }
}
