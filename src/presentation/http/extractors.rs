// src/presentation/http/extractors.rs
use std::{collections::HashMap, convert::Infallible};

use crate::{
    application::error::ApplicationError,
    domain::locale::Locale,
};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use headers::{Cookie, HeaderMapExt};

use super::error::HttpError;

pub const DRAFT_COOKIE: &str = "draft_mode";
const DRAFT_COOKIE_ENABLED: &str = "1";

/// The `{locale}` path segment, validated. Unknown locales reject with the
/// not-found page in the default locale.
#[derive(Debug, Clone, Copy)]
pub struct SiteLocale(pub Locale);

impl<S: Send + Sync> FromRequestParts<S> for SiteLocale {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;
        let code = params.get("locale").ok_or_else(not_found)?;

        Locale::parse(code)
            .map(Self)
            .map_err(|err| HttpError::from_error(err.into()).with_not_found_page(Locale::default()))
    }
}

fn not_found() -> HttpError {
    HttpError::from_error(ApplicationError::not_found("page not found"))
        .with_not_found_page(Locale::default())
}

/// Whether the request carries the preview cookie. Never rejects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftMode(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for DraftMode {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let enabled = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(DRAFT_COOKIE).map(|value| value == DRAFT_COOKIE_ENABLED))
            .unwrap_or(false);
        Ok(Self(enabled))
    }
}
