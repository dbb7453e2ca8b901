mod about_us;
mod service;

pub use about_us::GetAboutUsPageQuery;
pub use service::PageQueryService;
