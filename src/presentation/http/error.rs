// src/presentation/http/error.rs
use crate::{
    application::{ApplicationResult, error::ApplicationError, i18n::messages},
    domain::{errors::DomainError, locale::Locale},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    page: Option<NotFoundPage>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    // An unknown locale is an unknown page, not a malformed request.
    fn from_domain(err: DomainError) -> Self {
        let status = match &err {
            DomainError::UnsupportedLocale(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }

    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            page: None,
        }
    }

    /// Attaches the localized not-found page to a 404. Other statuses are
    /// returned unchanged.
    #[must_use]
    pub fn with_not_found_page(mut self, locale: Locale) -> Self {
        if self.status == StatusCode::NOT_FOUND {
            self.page = Some(NotFoundPage::new(locale));
        }
        self
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            page: self.page,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Page routes only: copy for the site's not-found page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<NotFoundPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundPage {
    pub locale: String,
    pub title: String,
    pub description: String,
    pub back_home_label: String,
    pub back_home_url: String,
}

impl NotFoundPage {
    pub fn new(locale: Locale) -> Self {
        let copy = messages(locale);
        Self {
            locale: locale.code().into(),
            title: copy.not_found_title.into(),
            description: copy.not_found_description.into(),
            back_home_label: copy.back_home.into(),
            back_home_url: format!("/{}", locale.code()),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;

    /// Like `into_http`, with the localized not-found page on a 404.
    fn into_page(self, locale: Locale) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_page(self, locale: Locale) -> HttpResult<T> {
        self.into_http()
            .map_err(|err| err.with_not_found_page(locale))
    }
}
