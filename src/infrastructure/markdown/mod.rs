//! Local markdown content: `<root>/<kind>/<locale>/<slug>.md` with YAML
//! front-matter.

mod front_matter;
mod render;
mod source;

pub use render::render_markdown;
pub use source::MarkdownContentSource;
