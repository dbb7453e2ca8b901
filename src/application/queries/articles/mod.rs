mod get_by_slug;
mod list;
mod service;
mod topics;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub use topics::ListArticlesByTopicQuery;
