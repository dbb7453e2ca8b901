// src/application/seo/mod.rs
//! Page metadata and JSON-LD structured data. Everything here is pure.

pub mod metadata;
pub mod site;
pub mod structured_data;

pub use metadata::{
    PageKind, PageMetadata, PageMetadataInput, SiteMetadata, page_metadata, site_metadata,
};
pub use site::SiteProfile;
pub use structured_data::{
    BreadcrumbInput, BreadcrumbList, JsonLd, Organization, WebPage, WebSite, breadcrumb_schema,
    organization_schema, web_page_schema, web_site_schema,
};
