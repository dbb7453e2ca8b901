// src/presentation/http/controllers/preview.rs
use crate::application::commands::preview::{
    EnablePreviewCommand, ExitPreviewCommand, PreviewDecision,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::DRAFT_COOKIE,
    state::HttpState,
};
use axum::{
    Extension,
    extract::Query,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PreviewParams {
    /// Shared preview secret.
    pub secret: Option<String>,
    /// Path to open, relative to the locale root (e.g. `blog/my-post`).
    pub url: Option<String>,
    /// `en` (default) or `ms`.
    pub locale: Option<String>,
    /// `draft` turns draft mode on; anything else turns it off.
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExitPreviewParams {
    /// `en` (default) or `ms`.
    pub locale: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/preview",
    params(PreviewParams),
    responses(
        (status = 307, description = "Draft cookie set or cleared; redirect to the requested page."),
        (status = 400, description = "Missing url or unsupported locale.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Secret missing or wrong.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Preview"
)]
pub async fn enable_preview(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PreviewParams>,
) -> HttpResult<Response> {
    let decision = state
        .services
        .preview
        .enable(EnablePreviewCommand {
            secret: params.secret,
            url: params.url,
            locale: params.locale,
            status: params.status,
        })
        .into_http()?;
    Ok(redirect_with_cookie(&decision))
}

#[utoipa::path(
    get,
    path = "/api/exit-preview",
    params(ExitPreviewParams),
    responses(
        (status = 307, description = "Draft cookie cleared; redirect to the blog listing."),
        (status = 400, description = "Unsupported locale.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Preview"
)]
pub async fn exit_preview(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ExitPreviewParams>,
) -> HttpResult<Response> {
    let decision = state
        .services
        .preview
        .exit(ExitPreviewCommand {
            locale: params.locale,
        })
        .into_http()?;
    Ok(redirect_with_cookie(&decision))
}

fn draft_cookie(draft: bool) -> String {
    if draft {
        format!("{DRAFT_COOKIE}=1; Path=/; HttpOnly; SameSite=Lax")
    } else {
        format!("{DRAFT_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

fn redirect_with_cookie(decision: &PreviewDecision) -> Response {
    (
        [(SET_COOKIE, draft_cookie(decision.draft))],
        Redirect::temporary(&decision.redirect),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn enabling_sets_cookie_and_redirects_temporarily() {
        let response = redirect_with_cookie(&PreviewDecision {
            draft: true,
            redirect: "/en/blog/post".into(),
        });
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/en/blog/post");
        assert_eq!(
            response.headers()[SET_COOKIE],
            "draft_mode=1; Path=/; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn disabling_expires_cookie() {
        assert!(draft_cookie(false).contains("Max-Age=0"));
        assert!(draft_cookie(false).starts_with("draft_mode=;"));
    }
}
