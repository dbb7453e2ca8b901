// src/presentation/http/controllers/pages.rs
use super::{PreviewBanner, page_structured_data, preview_banner};
use crate::application::{
    dto::{AboutUsPageDto, LinkDto, MediaDto},
    i18n::{PageKey, messages},
    queries::pages::GetAboutUsPageQuery,
    seo::{
        BreadcrumbInput, JsonLd, PageMetadata, PageMetadataInput, SiteMetadata,
        organization_schema, page_metadata, site_metadata, web_site_schema,
    },
};
use crate::domain::page::{Link, LinkVariant, Media};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::{DraftMode, SiteLocale},
    state::HttpState,
};
use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

const HOME_HERO_PATH: &str = "/images/top-kv_05_sp.jpg";
const HERO_WIDTH: u32 = 1500;
const HERO_HEIGHT: u32 = 840;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub tagline: String,
    pub image: MediaDto,
    pub call_to_action: LinkDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SpotlightContent {
    pub heading: String,
    pub tagline: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomePageResponse {
    pub locale: String,
    pub site: SiteMetadata,
    pub metadata: PageMetadata,
    pub hero: HeroContent,
    pub spotlight: SpotlightContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewBanner>,
    pub structured_data: Vec<JsonLd>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsPageResponse {
    pub locale: String,
    pub metadata: PageMetadata,
    pub page: AboutUsPageDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewBanner>,
    pub structured_data: Vec<JsonLd>,
}

#[utoipa::path(
    get,
    path = "/{locale}",
    params(("locale" = String, Path, description = "Site locale, `en` or `ms`")),
    responses(
        (status = 200, description = "Home page payload.", body = HomePageResponse),
        (status = 404, description = "Unsupported locale.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn home(
    Extension(state): Extension<HttpState>,
    SiteLocale(locale): SiteLocale,
    DraftMode(draft): DraftMode,
) -> Json<HomePageResponse> {
    let site = state.services.site();
    let copy = messages(locale);

    let metadata = page_metadata(
        &site,
        PageMetadataInput {
            locale,
            title: copy.title(PageKey::Home).into(),
            description: copy.description(PageKey::Home).into(),
            ..PageMetadataInput::default()
        },
    );

    let hero = HeroContent {
        tagline: copy.hero_tagline.into(),
        image: Media {
            url: format!("{}{HOME_HERO_PATH}", site.url),
            width: Some(HERO_WIDTH),
            height: Some(HERO_HEIGHT),
            alt: Some(site.name.clone()),
            mime: None,
        }
        .into(),
        call_to_action: Link {
            text: copy.read_more.into(),
            url: Some(format!("/{}/about", locale.code())),
            variant: LinkVariant::Button,
        }
        .into(),
    };

    Json(HomePageResponse {
        locale: locale.code().into(),
        site: site_metadata(&site, locale),
        metadata,
        hero,
        spotlight: SpotlightContent {
            heading: copy.listing_heading.into(),
            tagline: copy.listing_tagline.into(),
        },
        preview: preview_banner(locale, draft),
        structured_data: vec![
            organization_schema(&site, locale).into(),
            web_site_schema(&site, locale).into(),
        ],
    })
}

#[utoipa::path(
    get,
    path = "/{locale}/about",
    params(("locale" = String, Path, description = "Site locale, `en` or `ms`")),
    responses(
        (status = 200, description = "About Us page payload.", body = AboutUsPageResponse),
        (status = 404, description = "Unsupported locale, or no page in this locale.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn about(
    Extension(state): Extension<HttpState>,
    SiteLocale(locale): SiteLocale,
    DraftMode(draft): DraftMode,
) -> HttpResult<Json<AboutUsPageResponse>> {
    let page = state
        .services
        .page_queries
        .get_about_us_page(GetAboutUsPageQuery { locale, draft })
        .await
        .into_page(locale)?;

    let site = state.services.site();
    let copy = messages(locale);
    let title = copy.title(PageKey::About);
    let description = copy.description(PageKey::About);

    let metadata = page_metadata(
        &site,
        PageMetadataInput {
            locale,
            title: title.into(),
            description: description.into(),
            path: "about".into(),
            image: Some(page.hero_image.url.clone()),
            image_width: page.hero_image.width,
            image_height: page.hero_image.height,
            image_alt: page.hero_image.alt.clone(),
            ..PageMetadataInput::default()
        },
    );
    let structured_data = page_structured_data(
        &site,
        locale,
        title,
        description,
        &metadata.canonical,
        &[BreadcrumbInput::current(title)],
    );

    Ok(Json(AboutUsPageResponse {
        locale: locale.code().into(),
        metadata,
        page,
        preview: preview_banner(locale, draft),
        structured_data,
    }))
}
