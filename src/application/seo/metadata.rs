// src/application/seo/metadata.rs
use crate::application::seo::site::SiteProfile;
use crate::domain::locale::Locale;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

const DEFAULT_IMAGE_WIDTH: u32 = 1200;
const DEFAULT_IMAGE_HEIGHT: u32 = 630;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

#[derive(Debug, Clone, Default)]
pub struct PageMetadataInput {
    pub locale: Locale,
    pub title: String,
    pub description: String,
    /// Path below the locale prefix, e.g. `blog/my-post`. Empty for the
    /// locale root.
    pub path: String,
    pub image: Option<String>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    pub image_alt: Option<String>,
    pub kind: PageKind,
    pub published_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub images: Vec<OpenGraphImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TwitterCard {
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

pub fn page_metadata(site: &SiteProfile, input: PageMetadataInput) -> PageMetadata {
    let url = site.page_url(input.locale, &input.path);
    let full_title = format!("{} | {}", input.title, site.name);
    let alt = input
        .image_alt
        .filter(|alt| !alt.is_empty())
        .unwrap_or_else(|| format!("{} - {}", input.title, site.name));
    let image = absolute_image(site, input.image.as_deref().unwrap_or(&site.og_image));

    let published_time = match input.kind {
        PageKind::Article => input.published_time,
        PageKind::Website => None,
    };

    PageMetadata {
        open_graph: OpenGraph {
            title: full_title.clone(),
            description: input.description.clone(),
            url: url.clone(),
            kind: input.kind,
            images: vec![OpenGraphImage {
                url: image.clone(),
                width: input.image_width.unwrap_or(DEFAULT_IMAGE_WIDTH),
                height: input.image_height.unwrap_or(DEFAULT_IMAGE_HEIGHT),
                alt,
            }],
            published_time,
        },
        twitter: TwitterCard {
            title: full_title,
            description: input.description.clone(),
            images: vec![image],
        },
        title: input.title,
        description: input.description,
        canonical: url,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteOpenGraph {
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub locale: String,
    pub alternate_locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SiteTwitter {
    pub card: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Alternates {
    pub canonical: String,
    pub languages: BTreeMap<String, String>,
}

/// Site-wide defaults a layout applies before page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub application_name: String,
    pub keywords: Vec<String>,
    pub robots: Robots,
    pub open_graph: SiteOpenGraph,
    pub twitter: SiteTwitter,
    pub alternates: Alternates,
}

pub fn site_metadata(site: &SiteProfile, locale: Locale) -> SiteMetadata {
    let description = site.description(locale).to_string();
    let image = absolute_image(site, &site.og_image);
    let languages = Locale::ALL
        .iter()
        .map(|l| (l.code().to_string(), site.page_url(*l, "")))
        .collect();

    SiteMetadata {
        title: site.name.clone(),
        description: description.clone(),
        application_name: site.name.clone(),
        keywords: site.keywords.clone(),
        robots: Robots {
            index: true,
            follow: true,
        },
        open_graph: SiteOpenGraph {
            kind: PageKind::Website,
            locale: locale.open_graph().to_string(),
            alternate_locale: locale.alternate().open_graph().to_string(),
            url: site.url.clone(),
            site_name: site.name.clone(),
            title: site.name.clone(),
            description: description.clone(),
            images: vec![OpenGraphImage {
                url: image.clone(),
                width: DEFAULT_IMAGE_WIDTH,
                height: DEFAULT_IMAGE_HEIGHT,
                alt: site.name.clone(),
            }],
        },
        twitter: SiteTwitter {
            card: "summary_large_image".into(),
            site: site.twitter_site.clone(),
            creator: site.twitter_creator.clone(),
            title: site.name.clone(),
            description,
            images: vec![image],
        },
        alternates: Alternates {
            canonical: site.page_url(locale, ""),
            languages,
        },
    }
}

fn absolute_image(site: &SiteProfile, image: &str) -> String {
    if image.starts_with('/') && !image.starts_with("//") {
        format!("{}{image}", site.url)
    } else {
        image.to_string()
    }
}
