// tests/support/mocks/fixtures.rs
use corporate_site::application::ports::records::RawAboutUsPage;
use corporate_site::domain::article::ArticleKind;
use corporate_site::domain::locale::Locale;
use serde_json::json;

use super::content::MockContentSource;
use crate::support::builders::RawArticleBuilder;

pub const SAMPLE_MEDIA_BASE: &str = "https://cms.example.test";

/// 英語の About Us ページ（CMS のペイロード形式）
pub fn sample_about_us() -> RawAboutUsPage {
    serde_json::from_value(json!({
        "locale": "en",
        "heroTitle": "About Us",
        "heroSubtitle": "Who we are",
        "heroImage": { "url": "/uploads/hero.jpg", "width": 1920, "height": 1080, "alternativeText": "Our office" },
        "allSections": [
            { "section": {
                "title": "Our Story",
                "content": "<p>Founded in 1988.</p>",
                "backgroundColorLight": true,
                "linkType": "Button Link",
                "link": "/en/news",
                "linkTextToDisplay": "Latest news"
            } },
            { "section": null }
        ],
        "aboutUsSectionTwoCards": [
            { "title": "Mission", "description": "Deliver", "link": { "url": "/mission", "textToDisplay": "More", "type": "Primary Link" } }
        ],
        "allOurValues": null,
        "messageFromCEOLink": { "url": "/ceo", "textToDisplay": "Read the message", "type": "Unknown" }
    }))
    .unwrap()
}

/// 記事・ニュース・下書き・About Us を含む標準のテストデータ
pub fn sample_content() -> MockContentSource {
    MockContentSource::new()
        .with_article(
            ArticleKind::Blog,
            Locale::En,
            RawArticleBuilder::new("ai-in-manufacturing")
                .title("AI in manufacturing")
                .published_at("2025-03-01T09:00:00.000Z")
                .topic("AI")
                .rich_text("<p>Factories.</p>")
                .build(),
        )
        .with_article(
            ArticleKind::Blog,
            Locale::En,
            RawArticleBuilder::new("cloud-first")
                .published_at("2025-04-10T09:00:00.000Z")
                .topic("Cloud")
                .build(),
        )
        .with_article(
            ArticleKind::Blog,
            Locale::En,
            RawArticleBuilder::without_slug()
                .published_at("2025-05-01T09:00:00.000Z")
                .build(),
        )
        .with_article(
            ArticleKind::Blog,
            Locale::En,
            RawArticleBuilder::new("ai-ethics")
                .published_at("2025-01-15T09:00:00.000Z")
                .topic("AI")
                .build(),
        )
        .with_article(
            ArticleKind::Blog,
            Locale::Ms,
            RawArticleBuilder::new("awan-dahulu")
                .published_at("2025-04-10T09:00:00.000Z")
                .topic("Awan")
                .build(),
        )
        .with_article(
            ArticleKind::News,
            Locale::En,
            RawArticleBuilder::new("kl-office")
                .title("New Kuala Lumpur office")
                .published_at("2025-02-20T02:30:00.000Z")
                .location("Kuala Lumpur")
                .topic("ignored for news")
                .rich_text("<p>We moved.</p>")
                .build(),
        )
        .with_draft(
            ArticleKind::Blog,
            Locale::En,
            RawArticleBuilder::new("upcoming-launch")
                .title("Upcoming launch")
                .updated_at("2025-06-01T00:00:00.000Z")
                .topic("AI")
                .rich_text("<p>Secret.</p>")
                .build(),
        )
        .with_about(Locale::En, sample_about_us())
}
