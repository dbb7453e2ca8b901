// tests/support/builders.rs
use corporate_site::application::ports::records::{RawArticle, RawBlock};

pub struct RawArticleBuilder {
    record: RawArticle,
}

impl RawArticleBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            record: RawArticle {
                slug: Some(slug.into()),
                title: Some(format!("Title of {slug}")),
                description: Some(format!("Description of {slug}")),
                ..RawArticle::default()
            },
        }
    }

    /// Without a slug the record is rejected by the mapper.
    pub fn without_slug() -> Self {
        let mut builder = Self::new("unused");
        builder.record.slug = None;
        builder
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = Some(title.into());
        self
    }

    pub fn published_at(mut self, at: &str) -> Self {
        self.record.published_at = Some(at.into());
        self
    }

    pub fn updated_at(mut self, at: &str) -> Self {
        self.record.updated_at = Some(at.into());
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.record.topic = Some(topic.into());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.record.location = Some(location.into());
        self
    }

    pub fn rich_text(mut self, body: &str) -> Self {
        self.record.blocks.push(RawBlock {
            component: Some("shared.rich-text".into()),
            body: Some(body.into()),
        });
        self
    }

    pub fn build(self) -> RawArticle {
        self.record
    }
}
