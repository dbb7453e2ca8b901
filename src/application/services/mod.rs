use std::sync::Arc;

use crate::{
    application::{
        commands::preview::PreviewService,
        mapping::MediaUrlResolver,
        ports::content_source::ContentSource,
        queries::{articles::ArticleQueryService, pages::PageQueryService},
        seo::SiteProfile,
    },
    domain::page::Media,
};

const FALLBACK_HERO_PATH: &str = "/images/kv-d.jpg";
const FALLBACK_HERO_WIDTH: u32 = 1500;
const FALLBACK_HERO_HEIGHT: u32 = 840;

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub page_queries: Arc<PageQueryService>,
    pub preview: Arc<PreviewService>,
    site: Arc<SiteProfile>,
}

impl ApplicationServices {
    pub fn new(
        content: Arc<dyn ContentSource>,
        media: MediaUrlResolver,
        site: SiteProfile,
        preview_secret: Option<String>,
    ) -> Self {
        let fallback_hero = Media {
            url: format!("{}{FALLBACK_HERO_PATH}", site.url),
            width: Some(FALLBACK_HERO_WIDTH),
            height: Some(FALLBACK_HERO_HEIGHT),
            alt: Some(site.name.clone()),
            mime: None,
        };

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&content)));
        let page_queries = Arc::new(PageQueryService::new(content, media, fallback_hero));
        let preview = Arc::new(PreviewService::new(preview_secret));

        Self {
            article_queries,
            page_queries,
            preview,
            site: Arc::new(site),
        }
    }

    pub fn site(&self) -> Arc<SiteProfile> {
        Arc::clone(&self.site)
    }
}
