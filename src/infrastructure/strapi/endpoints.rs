use crate::domain::article::ArticleKind;

/// REST paths, relative to the CMS base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEndpoints {
    pub blog: String,
    pub news: String,
    pub about_us: String,
}

impl Default for ContentEndpoints {
    fn default() -> Self {
        Self {
            blog: "/api/articles".into(),
            news: "/api/news".into(),
            about_us: "/api/about-us-page".into(),
        }
    }
}

impl ContentEndpoints {
    pub fn collection(&self, kind: ArticleKind) -> &str {
        match kind {
            ArticleKind::Blog => &self.blog,
            ArticleKind::News => &self.news,
        }
    }
}
