pub mod error;
pub mod markdown;
pub mod strapi;
