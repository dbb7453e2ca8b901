// src/application/seo/structured_data.rs
//! schema.org records emitted as JSON-LD.

use crate::application::i18n::{PageKey, messages};
use crate::application::seo::site::SiteProfile;
use crate::domain::locale::Locale;
use serde::Serialize;
use utoipa::ToSchema;

const SCHEMA_CONTEXT: &str = "https://schema.org";

fn context() -> String {
    SCHEMA_CONTEXT.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub in_language: String,
    pub is_part_of: WebSiteRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WebSiteRef {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub position: u32,
    pub name: String,
    /// Absent for the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub address: PostalAddress,
    pub contact_point: ContactPoint,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub address_country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub contact_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub publisher: OrganizationRef,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub schema_type: String,
    pub url_template: String,
}

/// Any record a page may embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum JsonLd {
    WebPage(WebPage),
    BreadcrumbList(BreadcrumbList),
    Organization(Organization),
    WebSite(WebSite),
}

impl From<WebPage> for JsonLd {
    fn from(value: WebPage) -> Self {
        Self::WebPage(value)
    }
}

impl From<BreadcrumbList> for JsonLd {
    fn from(value: BreadcrumbList) -> Self {
        Self::BreadcrumbList(value)
    }
}

impl From<Organization> for JsonLd {
    fn from(value: Organization) -> Self {
        Self::Organization(value)
    }
}

impl From<WebSite> for JsonLd {
    fn from(value: WebSite) -> Self {
        Self::WebSite(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbInput {
    pub name: String,
    pub url: Option<String>,
}

impl BreadcrumbInput {
    pub fn linked(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: Some(url.into()),
        }
    }

    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

pub fn web_page_schema(
    site: &SiteProfile,
    locale: Locale,
    title: &str,
    description: &str,
    url: &str,
) -> WebPage {
    WebPage {
        context: context(),
        schema_type: "WebPage".into(),
        name: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        in_language: locale.language_tag().to_string(),
        is_part_of: WebSiteRef {
            schema_type: "WebSite".into(),
            url: site.url.clone(),
        },
    }
}

/// Home is always position 1; `items` follow from position 2.
pub fn breadcrumb_schema(site: &SiteProfile, locale: Locale, items: &[BreadcrumbInput]) -> BreadcrumbList {
    let home = ListItem {
        schema_type: "ListItem".into(),
        position: 1,
        name: messages(locale).title(PageKey::Home).to_string(),
        item: Some(site.page_url(locale, "")),
    };

    let rest = items.iter().zip(2u32..).map(|(input, position)| ListItem {
        schema_type: "ListItem".into(),
        position,
        name: input.name.clone(),
        item: input.url.clone().filter(|url| !url.is_empty()),
    });

    BreadcrumbList {
        context: context(),
        schema_type: "BreadcrumbList".into(),
        item_list_element: std::iter::once(home).chain(rest).collect(),
    }
}

pub fn organization_schema(site: &SiteProfile, locale: Locale) -> Organization {
    Organization {
        context: context(),
        schema_type: "Organization".into(),
        name: site.name.clone(),
        url: site.url.clone(),
        logo: site.logo_url(),
        description: site.description(locale).to_string(),
        address: PostalAddress {
            schema_type: "PostalAddress".into(),
            address_country: site.address_country.clone(),
            address_region: site.address_region.clone(),
            address_locality: site.address_locality.clone(),
        },
        contact_point: ContactPoint {
            schema_type: "ContactPoint".into(),
            contact_type: "Customer Service".into(),
        },
        same_as: site.same_as.clone(),
    }
}

pub fn web_site_schema(site: &SiteProfile, locale: Locale) -> WebSite {
    WebSite {
        context: context(),
        schema_type: "WebSite".into(),
        name: site.name.clone(),
        url: site.url.clone(),
        description: site.description(locale).to_string(),
        publisher: OrganizationRef {
            schema_type: "Organization".into(),
            name: site.name.clone(),
        },
        potential_action: SearchAction {
            schema_type: "SearchAction".into(),
            target: EntryPoint {
                schema_type: "EntryPoint".into(),
                url_template: format!("{}/search?q={{search_term_string}}", site.url),
            },
            query_input: "required name=search_term_string".into(),
        },
    }
}
