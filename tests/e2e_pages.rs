use std::sync::Arc;

use axum::http::{StatusCode, header::LOCATION};
use serde_json::{Value, json};

mod support;

fn slugs(body: &Value) -> Vec<&str> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect()
}

/// /health が 200 と status=ok を返すことを確認する
#[tokio::test]
async fn e2e_health_returns_ok() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/health").await).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

/// ルートはデフォルトロケールへリダイレクトする
#[tokio::test]
async fn e2e_root_redirects_to_default_locale() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], "/en");
}

/// ホームページはサイトメタデータと組織の構造化データを含む
#[tokio::test]
async fn e2e_home_page_carries_site_metadata() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/ms").await).await;

    assert_eq!(body["locale"], "ms");
    assert_eq!(body["metadata"]["title"], "Laman Utama");
    assert_eq!(body["metadata"]["canonical"], "https://www.example.test/ms");
    assert_eq!(body["site"]["openGraph"]["locale"], "ms_MY");
    assert_eq!(body["hero"]["callToAction"]["variant"], "buttonLink");
    assert_eq!(body["structuredData"][0]["@type"], "Organization");
    assert_eq!(body["structuredData"][1]["@type"], "WebSite");
    assert!(body.get("preview").is_none());
}

/// ブログ一覧は新しい順に並び、スラグのない記録は除外される
#[tokio::test]
async fn e2e_blog_listing_is_newest_first() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/en/blog").await).await;

    assert_eq!(slugs(&body), ["cloud-first", "ai-in-manufacturing", "ai-ethics"]);
    assert_eq!(body["topics"], json!(["Cloud", "AI"]));
    assert_eq!(body["items"][0]["date"], "2025-04-10T09:00:00.000Z");
    assert_eq!(body["metadata"]["canonical"], "https://www.example.test/en/blog");
    assert!(body.get("selectedTopic").is_none());
}

/// ブログ一覧の構造化データにはホームから始まるパンくずが含まれる
#[tokio::test]
async fn e2e_blog_listing_breadcrumbs_start_at_home() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/en/blog").await).await;

    assert_eq!(body["structuredData"][0]["@type"], "WebPage");
    assert_eq!(body["structuredData"][0]["inLanguage"], "en-US");
    assert_eq!(
        body["structuredData"][1]["itemListElement"],
        json!([
            { "@type": "ListItem", "position": 1, "name": "Home", "item": "https://www.example.test/en" },
            { "@type": "ListItem", "position": 2, "name": "Blog" }
        ])
    );
}

/// topic クエリで絞り込める
#[tokio::test]
async fn e2e_blog_listing_filters_by_topic() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/en/blog?topic=AI").await).await;

    assert_eq!(slugs(&body), ["ai-in-manufacturing", "ai-ethics"]);
    assert_eq!(body["selectedTopic"], "AI");
    assert_eq!(body["topics"], json!(["Cloud", "AI"]));
}

/// ロケールごとに別のコンテンツが返る
#[tokio::test]
async fn e2e_blog_listing_is_per_locale() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/ms/blog").await).await;
    assert_eq!(slugs(&body), ["awan-dahulu"]);
}

/// 空のコンテンツソースでも一覧は 200 と空配列を返す
#[tokio::test]
async fn e2e_empty_source_yields_empty_listing() {
    let app = support::make_test_router_with(Arc::new(support::MockContentSource::new()));
    let body = support::read_json(support::get(&app, "/en/news").await).await;
    assert_eq!(body["items"], json!([]));
    assert!(body.get("topics").is_none());
}

/// 未対応ロケールは 404 Not Found
#[tokio::test]
async fn e2e_unsupported_locale_returns_404() {
    let app = support::make_test_router();
    for uri in ["/fr", "/fr/blog", "/de/news/kl-office", "/EN/about"] {
        let resp = support::get(&app, uri).await;
        support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
    }
}

/// ニュース記事は location を持ち topic を持たない
#[tokio::test]
async fn e2e_news_article_has_location_and_article_metadata() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/en/news/kl-office").await).await;

    assert_eq!(body["kind"], "news");
    assert_eq!(body["article"]["location"], "Kuala Lumpur");
    assert!(body["article"].get("topic").is_none());
    assert_eq!(body["article"]["content"], "<p>We moved.</p>");

    let og = &body["metadata"]["openGraph"];
    assert_eq!(og["type"], "article");
    assert_eq!(og["title"], "New Kuala Lumpur office | Example Corp");
    assert_eq!(og["publishedTime"], "2025-02-20T02:30:00.000Z");
    assert_eq!(body["metadata"]["canonical"], "https://www.example.test/en/news/kl-office");

    let crumbs = &body["structuredData"][1]["itemListElement"];
    assert_eq!(crumbs[1]["name"], "News");
    assert_eq!(crumbs[1]["item"], "https://www.example.test/en/news");
    assert_eq!(crumbs[2]["position"], 3);
    assert!(crumbs[2].get("item").is_none());
}

/// 存在しないスラグで 404 Not Found を返すことを確認する
#[tokio::test]
async fn e2e_unknown_article_returns_404() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/en/blog/nonexistent").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// 下書き記事は draft_mode クッキーがある場合のみ取得できる
#[tokio::test]
async fn e2e_draft_article_requires_draft_cookie() {
    let content = Arc::new(support::sample_content());
    let app = support::make_test_router_with(content.clone());

    let resp = support::get(&app, "/en/blog/upcoming-launch").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let resp = support::get_in_draft_mode(&app, "/en/blog/upcoming-launch").await;
    let body = support::read_json(resp).await;
    assert_eq!(body["article"]["title"], "Upcoming launch");
    assert_eq!(body["article"]["date"], "2025-06-01T00:00:00.000Z");
    assert_eq!(body["preview"]["exitUrl"], "/api/exit-preview?locale=en");

    assert_eq!(content.draft_flags(), [false, true]);
}

/// About Us ページはメディア URL を解決し、空のセクションを除外する
#[tokio::test]
async fn e2e_about_page_maps_cms_record() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/en/about").await).await;
    let page = &body["page"];

    assert_eq!(page["heroTitle"], "About Us");
    assert_eq!(page["heroImage"]["url"], "https://cms.example.test/uploads/hero.jpg");
    assert_eq!(page["heroImage"]["alt"], "Our office");
    assert_eq!(page["sections"].as_array().unwrap().len(), 1);
    assert_eq!(page["sections"][0]["lightBackground"], true);
    assert_eq!(page["sections"][0]["link"]["variant"], "buttonLink");
    assert_eq!(page["sectionTwoCards"][0]["link"]["variant"], "primaryLink");
    assert_eq!(page["values"], json!([]));
    assert_eq!(page["ceoMessageLink"]["variant"], "tertiaryLink");

    assert_eq!(
        body["metadata"]["openGraph"]["images"][0]["url"],
        "https://cms.example.test/uploads/hero.jpg"
    );
    assert_eq!(body["metadata"]["openGraph"]["images"][0]["width"], 1920);
}

/// About Us レコードがないロケールは 404
#[tokio::test]
async fn e2e_about_page_without_record_returns_404() {
    let app = support::make_test_router();
    let resp = support::get(&app, "/ms/about").await;
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

/// About Us の取得にも draft フラグが渡される
#[tokio::test]
async fn e2e_about_page_forwards_draft_flag() {
    let content = Arc::new(support::sample_content());
    let app = support::make_test_router_with(content.clone());

    let resp = support::get_in_draft_mode(&app, "/en/about").await;
    let body = support::read_json(resp).await;
    assert!(body.get("preview").is_some());
    assert_eq!(content.draft_flags(), [true]);
}

/// OpenAPI ドキュメントが提供される
#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/openapi.json").await).await;
    assert!(body["paths"].get("/{locale}/blog/{slug}").is_some());
}

/// リッチテキストのない記事の詳細は空の本文を返す
#[tokio::test]
async fn e2e_article_without_rich_text_has_empty_content() {
    let app = support::make_test_router();
    let body = support::read_json(support::get(&app, "/en/blog/cloud-first").await).await;
    assert_eq!(body["article"]["content"], "");
}

/// ページの 404 はロケールに合わせた Not Found ページの文言を含む
#[tokio::test]
async fn e2e_page_not_found_is_localized() {
    let app = support::make_test_router();

    let body = support::read_error_json(support::get(&app, "/ms/about").await, StatusCode::NOT_FOUND).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(
        body["page"],
        json!({
            "locale": "ms",
            "title": "Halaman Tidak Dijumpai",
            "description": "Halaman yang anda cari tidak wujud atau telah dipindahkan.",
            "backHomeLabel": "Kembali ke Laman Utama",
            "backHomeUrl": "/ms"
        })
    );

    let body = support::read_error_json(support::get(&app, "/ms/news/missing").await, StatusCode::NOT_FOUND).await;
    assert_eq!(body["page"]["title"], "Halaman Tidak Dijumpai");

    let body = support::read_error_json(support::get(&app, "/en/blog/missing").await, StatusCode::NOT_FOUND).await;
    assert_eq!(body["page"]["title"], "Page Not Found");
    assert_eq!(body["page"]["backHomeUrl"], "/en");
}

/// 未対応ロケールの 404 はデフォルトロケールの文言を使う
#[tokio::test]
async fn e2e_unsupported_locale_not_found_uses_default_locale() {
    let app = support::make_test_router();
    let body = support::read_error_json(support::get(&app, "/fr/blog").await, StatusCode::NOT_FOUND).await;
    assert_eq!(body["page"]["locale"], "en");
    assert_eq!(body["page"]["backHomeLabel"], "Back to Home");
}
