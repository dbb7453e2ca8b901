use std::sync::Arc;

use crate::application::ports::content_source::ContentSource;

pub struct ArticleQueryService {
    pub(super) content: Arc<dyn ContentSource>,
}

impl ArticleQueryService {
    pub fn new(content: Arc<dyn ContentSource>) -> Self {
        Self { content }
    }
}
