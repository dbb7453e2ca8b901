use pulldown_cmark::{Options, Parser, html::push_html};

/// Markdown to HTML with GFM tables, strikethrough and task lists. Raw HTML
/// passes through unchanged.
pub fn render_markdown(markdown: &str) -> String {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(markdown, options);

    let mut html = String::with_capacity(markdown.len() * 2);
    push_html(&mut html, parser);
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_markdown("# Title\n\nSome *text*.");
        assert_eq!(html, "<h1>Title</h1>\n<p>Some <em>text</em>.</p>\n");
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
