// src/infrastructure/markdown/source.rs
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{front_matter, render_markdown};
use crate::{
    application::ports::{
        content_source::ContentSource,
        records::{RawAboutUsPage, RawArticle},
    },
    domain::{
        article::{ArticleKind, ArticleSlug},
        locale::Locale,
    },
    infrastructure::error::{SourceError, SourceResult},
};

const EXTENSION: &str = "md";

/// Reads articles from the filesystem. Files have no draft state and there
/// is no About Us singleton.
pub struct MarkdownContentSource {
    root: PathBuf,
}

impl MarkdownContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn directory(&self, kind: ArticleKind, locale: Locale) -> PathBuf {
        self.root.join(kind.label()).join(locale.code())
    }

    async fn collection(&self, kind: ArticleKind, locale: Locale) -> SourceResult<Vec<RawArticle>> {
        let paths = markdown_files(&self.directory(kind, locale)).await?;

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            match read_article(&path, kind, false).await {
                Ok(record) => records.push(record),
                Err(err) => tracing::warn!(error = %err, path = %path.display(), "skipping markdown file"),
            }
        }
        Ok(records)
    }

    /// Matches on the resolved slug (front-matter `slug`, else file stem), so
    /// every slug a listing reports can be looked up. `<slug>.md` is tried
    /// before scanning the directory.
    async fn item(&self, kind: ArticleKind, slug: &ArticleSlug, locale: Locale) -> SourceResult<Option<RawArticle>> {
        if !slug.is_path_safe() {
            tracing::warn!(%slug, "rejected unsafe markdown slug");
            return Ok(None);
        }
        let dir = self.directory(kind, locale);
        let direct = dir.join(format!("{}.{EXTENSION}", slug.as_str()));

        match read_article(&direct, kind, true).await {
            Ok(record) if has_slug(&record, slug) => return Ok(Some(record)),
            Ok(_) => {}
            Err(err) if err.is_not_found() => {}
            Err(err) => tracing::warn!(error = %err, path = %direct.display(), "skipping markdown file"),
        }

        for path in markdown_files(&dir).await? {
            if path == direct {
                continue;
            }
            match read_article(&path, kind, false).await {
                Ok(record) if has_slug(&record, slug) => {
                    return read_article(&path, kind, true).await.map(Some);
                }
                Ok(_) => {}
                Err(err) => tracing::warn!(error = %err, path = %path.display(), "skipping markdown file"),
            }
        }
        Ok(None)
    }
}

/// `*.md` files directly under `dir`, sorted by path.
async fn markdown_files(dir: &Path) -> SourceResult<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn has_slug(record: &RawArticle, slug: &ArticleSlug) -> bool {
    record.slug.as_deref() == Some(slug.as_str())
}

async fn read_article(path: &Path, kind: ArticleKind, with_content: bool) -> SourceResult<RawArticle> {
    let document = tokio::fs::read_to_string(path).await?;
    let (fm, body) = front_matter::split(&document).map_err(|reason| SourceError::FrontMatter {
        path: path.display().to_string(),
        reason,
    })?;

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());

    Ok(RawArticle {
        slug: fm.slug.filter(|slug| !slug.trim().is_empty()).or(stem),
        title: fm.title,
        description: fm.description,
        topic: fm.topic.filter(|_| kind == ArticleKind::Blog),
        location: fm.location.filter(|_| kind == ArticleKind::News),
        date: fm.date,
        content: with_content.then(|| render_markdown(body)),
        ..RawArticle::default()
    })
}

#[async_trait]
impl ContentSource for MarkdownContentSource {
    async fn fetch_collection(&self, kind: ArticleKind, locale: Locale) -> Vec<RawArticle> {
        self.collection(kind, locale).await.unwrap_or_else(|err| {
            if err.is_not_found() {
                tracing::debug!(%kind, %locale, "no markdown directory");
            } else {
                tracing::error!(error = %err, %kind, %locale, "failed to read markdown collection");
            }
            Vec::new()
        })
    }

    async fn fetch_item_by_slug(
        &self,
        kind: ArticleKind,
        slug: &ArticleSlug,
        locale: Locale,
        _draft: bool,
    ) -> Option<RawArticle> {
        self.item(kind, slug, locale).await.unwrap_or_else(|err| {
            if !err.is_not_found() {
                tracing::error!(error = %err, %kind, %slug, %locale, "failed to read markdown article");
            }
            None
        })
    }

    async fn fetch_singleton(&self, _locale: Locale, _draft: bool) -> Option<RawAboutUsPage> {
        None
    }
}
