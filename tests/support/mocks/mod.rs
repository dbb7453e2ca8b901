// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod fixtures;

// コンテンツソース
pub use content::MockContentSource;

// サンプルデータ
pub use fixtures::{sample_content, SAMPLE_MEDIA_BASE};
