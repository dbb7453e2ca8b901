// src/presentation/http/controllers/articles.rs
use super::{PreviewBanner, page_structured_data, preview_banner};
use crate::application::{
    ApplicationResult,
    dto::ArticleDto,
    i18n::{PageKey, messages},
    queries::articles::{GetArticleBySlugQuery, ListArticlesByTopicQuery, ListArticlesQuery},
    seo::{BreadcrumbInput, JsonLd, PageKind, PageMetadata, PageMetadataInput, page_metadata},
};
use crate::domain::{article::ArticleKind, locale::Locale};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::{DraftMode, SiteLocale},
    state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogListParams {
    /// Only list blog posts with this topic.
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub locale: String,
    pub kind: String,
    pub metadata: PageMetadata,
    /// Newest first.
    pub items: Vec<ArticleDto>,
    /// Blog only: every topic in the locale, newest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewBanner>,
    pub structured_data: Vec<JsonLd>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub locale: String,
    pub kind: String,
    pub metadata: PageMetadata,
    pub article: ArticleDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewBanner>,
    pub structured_data: Vec<JsonLd>,
}

const fn page_key(kind: ArticleKind) -> PageKey {
    match kind {
        ArticleKind::Blog => PageKey::Blog,
        ArticleKind::News => PageKey::News,
    }
}

#[utoipa::path(
    get,
    path = "/{locale}/blog",
    params(
        ("locale" = String, Path, description = "Site locale, `en` or `ms`"),
        BlogListParams
    ),
    responses(
        (status = 200, description = "Blog listing with topics.", body = ArticleListResponse),
        (status = 404, description = "Unsupported locale.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_blog(
    Extension(state): Extension<HttpState>,
    SiteLocale(locale): SiteLocale,
    DraftMode(draft): DraftMode,
    Query(params): Query<BlogListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let queries = &state.services.article_queries;
    let topic = params.topic.filter(|topic| !topic.trim().is_empty());

    let items = async {
        match &topic {
            Some(topic) => {
                queries
                    .list_blogs_by_topic(ListArticlesByTopicQuery {
                        topic: topic.clone(),
                        locale,
                    })
                    .await
            }
            None => {
                queries
                    .list_articles(ListArticlesQuery {
                        kind: ArticleKind::Blog,
                        locale,
                    })
                    .await
            }
        }
    };
    let (items, topics) = tokio::join!(items, queries.list_topics(locale));

    listing(&state, ArticleKind::Blog, locale, draft, items, topics, topic)
}

#[utoipa::path(
    get,
    path = "/{locale}/news",
    params(("locale" = String, Path, description = "Site locale, `en` or `ms`")),
    responses(
        (status = 200, description = "News listing.", body = ArticleListResponse),
        (status = 404, description = "Unsupported locale.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    SiteLocale(locale): SiteLocale,
    DraftMode(draft): DraftMode,
) -> HttpResult<Json<ArticleListResponse>> {
    let items = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            kind: ArticleKind::News,
            locale,
        })
        .await;

    listing(&state, ArticleKind::News, locale, draft, items, Ok(Vec::new()), None)
}

#[utoipa::path(
    get,
    path = "/{locale}/blog/{slug}",
    params(
        ("locale" = String, Path, description = "Site locale, `en` or `ms`"),
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Blog article with rendered content.", body = ArticleResponse),
        (status = 404, description = "Unsupported locale or unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_blog(
    Extension(state): Extension<HttpState>,
    SiteLocale(locale): SiteLocale,
    DraftMode(draft): DraftMode,
    Path((_, slug)): Path<(String, String)>,
) -> HttpResult<Json<ArticleResponse>> {
    article(&state, ArticleKind::Blog, locale, slug, draft)
        .await
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/{locale}/news/{slug}",
    params(
        ("locale" = String, Path, description = "Site locale, `en` or `ms`"),
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "News article with rendered content.", body = ArticleResponse),
        (status = 404, description = "Unsupported locale or unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    SiteLocale(locale): SiteLocale,
    DraftMode(draft): DraftMode,
    Path((_, slug)): Path<(String, String)>,
) -> HttpResult<Json<ArticleResponse>> {
    article(&state, ArticleKind::News, locale, slug, draft)
        .await
        .map(Json)
}

fn listing(
    state: &HttpState,
    kind: ArticleKind,
    locale: Locale,
    draft: bool,
    items: ApplicationResult<Vec<ArticleDto>>,
    topics: ApplicationResult<Vec<String>>,
    selected_topic: Option<String>,
) -> HttpResult<Json<ArticleListResponse>> {
    let items = items.into_http()?;
    let topics = topics.into_http()?;

    let site = state.services.site();
    let copy = messages(locale);
    let title = copy.title(page_key(kind));
    let description = copy.description(page_key(kind));

    let metadata = page_metadata(
        &site,
        PageMetadataInput {
            locale,
            title: title.into(),
            description: description.into(),
            path: kind.label().into(),
            ..PageMetadataInput::default()
        },
    );
    let structured_data = page_structured_data(
        &site,
        locale,
        title,
        description,
        &metadata.canonical,
        &[BreadcrumbInput::current(title)],
    );

    Ok(Json(ArticleListResponse {
        locale: locale.code().into(),
        kind: kind.label().into(),
        metadata,
        items,
        topics,
        selected_topic,
        preview: preview_banner(locale, draft),
        structured_data,
    }))
}

async fn article(
    state: &HttpState,
    kind: ArticleKind,
    locale: Locale,
    slug: String,
    draft: bool,
) -> HttpResult<ArticleResponse> {
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery {
            kind,
            slug,
            locale,
            draft,
        })
        .await
        .into_page(locale)?;

    let site = state.services.site();
    let listing_title = messages(locale).title(page_key(kind));

    let metadata = page_metadata(
        &site,
        PageMetadataInput {
            locale,
            title: article.title.clone(),
            description: article.description.clone(),
            path: format!("{}/{}", kind.label(), article.slug),
            image_alt: Some(article.title.clone()),
            kind: PageKind::Article,
            published_time: Some(article.date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            ..PageMetadataInput::default()
        },
    );
    let structured_data = page_structured_data(
        &site,
        locale,
        &article.title,
        &article.description,
        &metadata.canonical,
        &[
            BreadcrumbInput::linked(listing_title, site.page_url(locale, kind.label())),
            BreadcrumbInput::current(article.title.clone()),
        ],
    );

    Ok(ArticleResponse {
        locale: locale.code().into(),
        kind: kind.label().into(),
        metadata,
        article,
        preview: preview_banner(locale, draft),
        structured_data,
    })
}
