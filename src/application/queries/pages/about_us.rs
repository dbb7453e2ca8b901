use super::PageQueryService;
use crate::{
    application::{
        dto::AboutUsPageDto,
        error::{ApplicationError, ApplicationResult},
        mapping,
    },
    domain::locale::Locale,
};

pub struct GetAboutUsPageQuery {
    pub locale: Locale,
    pub draft: bool,
}

impl PageQueryService {
    /// `NotFound` when the locale has no About Us record.
    pub async fn get_about_us_page(
        &self,
        query: GetAboutUsPageQuery,
    ) -> ApplicationResult<AboutUsPageDto> {
        let record = self.content.fetch_singleton(query.locale, query.draft).await;

        mapping::to_about_us_page(record, query.locale, &self.media)
            .map(|page| AboutUsPageDto::from_page(page, &self.fallback_hero))
            .ok_or_else(|| ApplicationError::not_found("about us page not found"))
    }
}
