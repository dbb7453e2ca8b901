// src/application/mapping/mod.rs
//! Raw content records to page view-models.

pub mod about_us;
pub mod article;
pub mod date;
pub mod media;

pub use about_us::to_about_us_page;
pub use article::{to_article, to_article_detail, to_articles};
pub use media::MediaUrlResolver;
