use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

/// Article collections published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    Blog,
    News,
}

impl ArticleKind {
    /// Unknown labels yield `None` rather than an error; mapping treats a
    /// missing kind as "no kind-specific field".
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "blog" => Some(Self::Blog),
            "news" => Some(Self::News),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::News => "news",
        }
    }
}

impl fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the slug can be used as a single file name.
    pub fn is_path_safe(&self) -> bool {
        !self.0.contains(['/', '\\']) && !self.0.contains("..")
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parse_is_exact() {
        assert_eq!(ArticleKind::parse("blog"), Some(ArticleKind::Blog));
        assert_eq!(ArticleKind::parse("news"), Some(ArticleKind::News));
        assert_eq!(ArticleKind::parse("Blog"), None);
        assert_eq!(ArticleKind::parse("events"), None);
    }

    #[test]
    fn slug_rejects_blank() {
        assert!(ArticleSlug::new("  ").is_err());
        assert_eq!(ArticleSlug::new("hello").unwrap().as_str(), "hello");
    }

    #[test]
    fn slug_path_safety() {
        assert!(ArticleSlug::new("ai-in-2025").unwrap().is_path_safe());
        assert!(!ArticleSlug::new("../secrets").unwrap().is_path_safe());
        assert!(!ArticleSlug::new("a/b").unwrap().is_path_safe());
        assert!(!ArticleSlug::new("a\\b").unwrap().is_path_safe());
    }
}
