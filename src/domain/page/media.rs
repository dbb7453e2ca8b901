// src/domain/page/media.rs

/// An uploaded asset referenced by page content.
///
/// `url` is always absolute once it reaches the domain. Width and height are
/// `None` for non-image media such as PDFs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
    pub mime: Option<String>,
}
