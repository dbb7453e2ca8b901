// src/application/mapping/media.rs
use crate::application::ports::records::RawMedia;
use crate::domain::page::Media;

const ABSOLUTE_PREFIXES: [&str; 3] = ["https://", "http://", "//"];

/// Turns CMS upload paths into absolute URLs.
#[derive(Debug, Clone)]
pub struct MediaUrlResolver {
    base_url: String,
}

impl MediaUrlResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs pass through; anything else is appended to the base.
    pub fn resolve(&self, url: &str) -> String {
        if ABSOLUTE_PREFIXES
            .iter()
            .any(|prefix| url.get(..prefix.len()).is_some_and(|p| p.eq_ignore_ascii_case(prefix)))
        {
            return url.to_string();
        }
        if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            format!("{}/{url}", self.base_url)
        }
    }

    /// `None` when the record carries no URL.
    pub fn media(&self, raw: &RawMedia) -> Option<Media> {
        let url = raw.url.as_deref().filter(|u| !u.trim().is_empty())?;
        Some(Media {
            url: self.resolve(url),
            width: raw.width,
            height: raw.height,
            alt: raw.alternative_text.clone().filter(|a| !a.is_empty()),
            mime: raw.mime.clone(),
        })
    }
}
