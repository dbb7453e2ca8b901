pub mod entity;
pub mod value_objects;

pub use entity::{Article, sort_newest_first};
pub use value_objects::{ArticleKind, ArticleSlug};
