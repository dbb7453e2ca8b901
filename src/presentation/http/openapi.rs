// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";
const LOCAL_SERVER: &str = "http://localhost:3000";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::pages::home,
        crate::presentation::http::controllers::pages::about,
        crate::presentation::http::controllers::articles::list_blog,
        crate::presentation::http::controllers::articles::get_blog,
        crate::presentation::http::controllers::articles::list_news,
        crate::presentation::http::controllers::articles::get_news,
        crate::presentation::http::controllers::preview::enable_preview,
        crate::presentation::http::controllers::preview::exit_preview,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::NotFoundPage,
            crate::presentation::http::controllers::PreviewBanner,
            crate::presentation::http::controllers::pages::HomePageResponse,
            crate::presentation::http::controllers::pages::AboutUsPageResponse,
            crate::presentation::http::controllers::pages::HeroContent,
            crate::presentation::http::controllers::pages::SpotlightContent,
            crate::presentation::http::controllers::articles::ArticleListResponse,
            crate::presentation::http::controllers::articles::ArticleResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::AboutUsPageDto,
            crate::application::dto::SectionDto,
            crate::application::dto::CardDto,
            crate::application::dto::ValueDto,
            crate::application::dto::LinkDto,
            crate::application::dto::MediaDto,
            crate::application::seo::PageMetadata,
            crate::application::seo::SiteMetadata,
            crate::application::seo::JsonLd
        )
    ),
    tags(
        (name = "Pages", description = "Home and About Us page payloads"),
        (name = "Articles", description = "Blog and news listings and articles"),
        (name = "Preview", description = "Draft mode toggles for CMS editors"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Corporate Site API",
        description = "Localized page payloads backed by a headless CMS",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == LOCAL_SERVER) {
            urls.push(LOCAL_SERVER.to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs`, document at `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
