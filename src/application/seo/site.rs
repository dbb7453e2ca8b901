// src/application/seo/site.rs
use crate::domain::locale::Locale;

/// Site-wide identity used by metadata and structured data.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub name: String,
    /// Canonical origin (and optional base path) without a trailing slash.
    pub url: String,
    /// Default Open Graph image, relative to the site or absolute.
    pub og_image: String,
    /// `@handle` of the site's account.
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
    pub description_en: String,
    pub description_ms: String,
    pub keywords: Vec<String>,
    pub same_as: Vec<String>,
    pub address_country: String,
    pub address_region: Option<String>,
    pub address_locality: Option<String>,
}

impl SiteProfile {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            og_image: "/images/og-image.jpg".into(),
            twitter_site: None,
            twitter_creator: None,
            description_en: format!(
                "{name} is a leading IT consulting firm providing digital solutions, strategic consulting and technology services."
            ),
            description_ms: format!(
                "{name} ialah firma perunding IT terkemuka yang menyediakan penyelesaian digital, perundingan strategik dan perkhidmatan teknologi."
            ),
            keywords: vec![
                "IT consulting".into(),
                "digital transformation".into(),
                "technology solutions".into(),
                "cloud services".into(),
                "data analytics".into(),
            ],
            same_as: Vec::new(),
            address_country: "MY".into(),
            address_region: Some("Kuala Lumpur".into()),
            address_locality: Some("Malaysia".into()),
            name,
        }
    }

    #[must_use]
    pub fn with_twitter(mut self, site: Option<&str>, creator: Option<&str>) -> Self {
        self.twitter_site = site.map(str::to_string);
        self.twitter_creator = creator.map(str::to_string);
        self
    }

    pub fn description(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.description_en,
            Locale::Ms => &self.description_ms,
        }
    }

    /// `<site>/<locale>` or `<site>/<locale>/<path>`.
    pub fn page_url(&self, locale: Locale, path: &str) -> String {
        let path = path.trim_matches('/');
        if path.is_empty() {
            format!("{}/{}", self.url, locale.code())
        } else {
            format!("{}/{}/{path}", self.url, locale.code())
        }
    }

    pub fn logo_url(&self) -> String {
        format!("{}/images/header_logo.svg", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_omits_empty_path() {
        let site = SiteProfile::new("Acme", "https://acme.example/my/");
        assert_eq!(site.url, "https://acme.example/my");
        assert_eq!(site.page_url(Locale::En, ""), "https://acme.example/my/en");
        assert_eq!(site.page_url(Locale::Ms, "/blog/"), "https://acme.example/my/ms/blog");
        assert_eq!(site.page_url(Locale::En, "news/launch"), "https://acme.example/my/en/news/launch");
    }
}
