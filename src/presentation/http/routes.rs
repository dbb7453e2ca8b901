// src/presentation/http/routes.rs
use crate::domain::locale::Locale;
use crate::presentation::http::middleware::rate_limit_layer;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, pages, preview},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    response::Redirect,
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Tests pass `false`: the limiter keys on the peer address, which a
/// `oneshot` request does not carry.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .route("/api/preview", get(preview::enable_preview))
        .route("/api/exit-preview", get(preview::exit_preview))
        .route("/{locale}", get(pages::home))
        .route("/{locale}/about", get(pages::about))
        .route("/{locale}/blog", get(articles::list_blog))
        .route("/{locale}/blog/{slug}", get(articles::get_blog))
        .route("/{locale}/news", get(articles::list_news))
        .route("/{locale}/news/{slug}", get(articles::get_news))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state));

    match rate_limit.then(rate_limit_layer).flatten() {
        Some(limiter) => router.layer(limiter),
        None => router,
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .max_age(Duration::from_secs(3600))
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(&format!("/{}", Locale::default().code()))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
