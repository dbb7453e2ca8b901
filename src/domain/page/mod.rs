pub mod entity;
pub mod link;
pub mod media;

pub use entity::{AboutUsPage, Card, Section, Value};
pub use link::{Link, LinkVariant};
pub use media::Media;
