// src/infrastructure/strapi/client.rs
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::application::ports::records::null_as_default;
use crate::infrastructure::error::{SourceError, SourceResult};

#[derive(Debug, Clone)]
pub struct StrapiSettings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

/// `{ "data": [...] }`
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct CollectionEnvelope<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    data: Vec<T>,
}

/// `{ "data": {...} | null }`
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct SingleEnvelope<T> {
    #[serde(default)]
    data: Option<T>,
}

/// Thin HTTP client over one Strapi instance. Holds a single connection
/// pool shared by every request.
#[derive(Debug, Clone)]
pub struct StrapiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl StrapiClient {
    pub fn new(settings: StrapiSettings) -> SourceResult<Self> {
        // Reads are never cached, drafts included.
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()?;

        let base_url = settings.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            http,
            base_url,
            api_token: settings.api_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn url(&self, path: &str, params: &[(&str, &str)]) -> SourceResult<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))?;
        // An empty pair list would still leave a bare `?`.
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    pub(super) async fn get_collection<T: DeserializeOwned>(&self, url: Url) -> SourceResult<Vec<T>> {
        let envelope: CollectionEnvelope<T> = self.get_json(url).await?;
        Ok(envelope.data)
    }

    pub(super) async fn get_single<T: DeserializeOwned>(&self, url: Url) -> SourceResult<Option<T>> {
        let envelope: SingleEnvelope<T> = self.get_json(url).await?;
        Ok(envelope.data)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> SourceResult<T> {
        tracing::debug!(%url, "requesting cms content");

        let mut request = self.http.get(url.clone());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
