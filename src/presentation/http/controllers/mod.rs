// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod pages;
pub mod preview;

use crate::{
    application::{
        i18n::messages,
        seo::{BreadcrumbInput, JsonLd, SiteProfile, breadcrumb_schema, web_page_schema},
    },
    domain::locale::Locale,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Shown on every page while draft mode is on.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewBanner {
    pub message: String,
    pub exit_label: String,
    pub exit_url: String,
}

fn preview_banner(locale: Locale, draft: bool) -> Option<PreviewBanner> {
    draft.then(|| {
        let copy = messages(locale);
        PreviewBanner {
            message: copy.preview_message.into(),
            exit_label: copy.preview_exit.into(),
            exit_url: format!("/api/exit-preview?locale={}", locale.code()),
        }
    })
}

/// `WebPage` plus breadcrumbs, the pair every inner page embeds.
fn page_structured_data(
    site: &SiteProfile,
    locale: Locale,
    title: &str,
    description: &str,
    canonical: &str,
    crumbs: &[BreadcrumbInput],
) -> Vec<JsonLd> {
    vec![
        web_page_schema(site, locale, title, description, canonical).into(),
        breadcrumb_schema(site, locale, crumbs).into(),
    ]
}
