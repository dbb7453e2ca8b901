use std::sync::Arc;

use crate::application::{mapping::MediaUrlResolver, ports::content_source::ContentSource};
use crate::domain::page::Media;

pub struct PageQueryService {
    pub(super) content: Arc<dyn ContentSource>,
    pub(super) media: MediaUrlResolver,
    pub(super) fallback_hero: Media,
}

impl PageQueryService {
    pub fn new(content: Arc<dyn ContentSource>, media: MediaUrlResolver, fallback_hero: Media) -> Self {
        Self {
            content,
            media,
            fallback_hero,
        }
    }
}
