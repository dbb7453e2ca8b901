//! Strapi v5 REST adapter.

mod client;
mod endpoints;
mod source;

pub use client::{StrapiClient, StrapiSettings};
pub use endpoints::ContentEndpoints;
pub use source::StrapiContentSource;
