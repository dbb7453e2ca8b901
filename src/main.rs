use anyhow::{Context, Result};
use corporate_site::application::{
    mapping::MediaUrlResolver, ports::content_source::ContentSource,
    services::ApplicationServices, seo::SiteProfile,
};
use corporate_site::config::{AppConfig, ContentSourceKind};
use corporate_site::infrastructure::{
    markdown::MarkdownContentSource,
    strapi::{ContentEndpoints, StrapiClient, StrapiContentSource, StrapiSettings},
};
use corporate_site::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let content = content_source(&config)?;
    let site = SiteProfile::new(config.site_name(), config.site_url())
        .with_twitter(config.twitter_site(), config.twitter_creator());
    let media = MediaUrlResolver::new(config.public_strapi_url());

    let services = Arc::new(ApplicationServices::new(
        content,
        media,
        site,
        config.preview_secret().map(str::to_string),
    ));

    let state = HttpState {
        services,
        allowed_origins: config.allowed_origins().into(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn content_source(config: &AppConfig) -> Result<Arc<dyn ContentSource>> {
    match config.content_source() {
        ContentSourceKind::Strapi => {
            let client = StrapiClient::new(StrapiSettings {
                base_url: config.strapi_url().to_string(),
                api_token: config.strapi_api_token().map(str::to_string),
                timeout: config.cms_timeout(),
            })
            .context("failed to build CMS client")?;
            tracing::info!(cms = client.base_url(), "serving content from strapi");
            Ok(Arc::new(StrapiContentSource::new(
                client,
                ContentEndpoints::default(),
            )))
        }
        ContentSourceKind::Markdown => {
            tracing::info!(dir = %config.content_dir().display(), "serving content from markdown");
            Ok(Arc::new(MarkdownContentSource::new(
                config.content_dir().clone(),
            )))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,reqwest=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
