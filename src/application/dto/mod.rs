pub mod articles;
pub mod pages;
pub mod serde_time;

pub use articles::ArticleDto;
pub use pages::{AboutUsPageDto, CardDto, LinkDto, MediaDto, SectionDto, ValueDto};
