// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";
const DEFAULT_CONTENT_DIR: &str = "data";
const DEFAULT_SITE_URL: &str = "https://www.example.com";
const DEFAULT_SITE_NAME: &str = "Corporate Site";
const DEFAULT_CMS_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Where page content comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContentSourceKind {
    #[default]
    Strapi,
    Markdown,
}

impl ContentSourceKind {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strapi" => Ok(Self::Strapi),
            "markdown" => Ok(Self::Markdown),
            other => Err(ConfigError::Invalid(format!(
                "CONTENT_SOURCE must be `strapi` or `markdown`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    strapi_url: String,
    public_strapi_url: String,
    strapi_api_token: Option<String>,
    preview_secret: Option<String>,
    content_source: ContentSourceKind,
    content_dir: PathBuf,
    site_url: String,
    site_name: String,
    twitter_site: Option<String>,
    twitter_creator: Option<String>,
    cms_timeout: Duration,
    allowed_origins: Vec<String>,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// Build configuration from environment variables. Every variable has a
    /// default; malformed values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let listen_addr = get("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid(format!("LISTEN_ADDR: {err}")))?;

        let strapi_url = base_url("STRAPI_URL", get("STRAPI_URL"), DEFAULT_STRAPI_URL)?;
        let public_strapi_url = match get("PUBLIC_STRAPI_URL") {
            Some(value) => base_url("PUBLIC_STRAPI_URL", Some(value), DEFAULT_STRAPI_URL)?,
            None => strapi_url.clone(),
        };
        let site_url = base_url("SITE_URL", get("SITE_URL"), DEFAULT_SITE_URL)?;

        let content_source = get("CONTENT_SOURCE")
            .map(|value| ContentSourceKind::parse(&value))
            .transpose()?
            .unwrap_or_default();

        let cms_timeout_secs = match get("CMS_TIMEOUT_SECONDS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "CMS_TIMEOUT_SECONDS must be a positive integer, got `{value}`"
                    ))
                })?,
            None => DEFAULT_CMS_TIMEOUT_SECS,
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);

        let rate_limit_enabled = get("RATE_LIMIT_ENABLED")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            strapi_url,
            public_strapi_url,
            strapi_api_token: get("STRAPI_API_TOKEN"),
            preview_secret: get("PREVIEW_SECRET"),
            content_source,
            content_dir: PathBuf::from(
                get("CONTENT_DIR").unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string()),
            ),
            site_url,
            site_name: get("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            twitter_site: get("TWITTER_SITE"),
            twitter_creator: get("TWITTER_CREATOR"),
            cms_timeout: Duration::from_secs(cms_timeout_secs),
            allowed_origins,
            rate_limit_enabled,
        })
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    pub fn strapi_url(&self) -> &str {
        &self.strapi_url
    }

    /// Base for media URLs handed to browsers.
    pub fn public_strapi_url(&self) -> &str {
        &self.public_strapi_url
    }

    pub fn strapi_api_token(&self) -> Option<&str> {
        self.strapi_api_token.as_deref()
    }

    pub fn preview_secret(&self) -> Option<&str> {
        self.preview_secret.as_deref()
    }

    pub const fn content_source(&self) -> ContentSourceKind {
        self.content_source
    }

    pub fn content_dir(&self) -> &PathBuf {
        &self.content_dir
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn twitter_site(&self) -> Option<&str> {
        self.twitter_site.as_deref()
    }

    pub fn twitter_creator(&self) -> Option<&str> {
        self.twitter_creator.as_deref()
    }

    pub const fn cms_timeout(&self) -> Duration {
        self.cms_timeout
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}

fn base_url(key: &'static str, value: Option<String>, default: &str) -> Result<String, ConfigError> {
    let value = value.unwrap_or_else(|| default.to_string());
    let parsed = Url::parse(&value).map_err(|err| ConfigError::Invalid(format!("{key}: {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!("{key} must be an http(s) URL")));
    }
    Ok(value.trim_end_matches('/').to_string())
}
