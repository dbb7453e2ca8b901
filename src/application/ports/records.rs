// src/application/ports/records.rs
//! Raw content records as delivered by a content source.
//!
//! These mirror the Strapi v5 REST payloads (camelCase, flat documents). The
//! markdown source produces the same `RawArticle` from front-matter. Every
//! field is optional and every collection tolerates both a missing key and
//! an explicit `null`, so payload drift between CMS versions degrades to
//! empty values instead of decode failures.

use serde::{Deserialize, Deserializer};

/// Treats `null` like a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawArticle {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub topic: Option<String>,
    pub location: Option<String>,
    /// Authored date, used by markdown front-matter.
    pub date: Option<String>,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_at: Option<String>,
    /// Pre-rendered HTML body.
    pub content: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub blocks: Vec<RawBlock>,
}

/// A dynamic-zone block. Only rich-text blocks are consumed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawBlock {
    #[serde(rename = "__component")]
    pub component: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMedia {
    pub name: Option<String>,
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alternative_text: Option<String>,
    pub mime: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLink {
    pub url: Option<String>,
    pub text_to_display: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSectionContent {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub background_color_light: Option<bool>,
    pub link_type: Option<String>,
    pub link: Option<String>,
    pub link_text_to_display: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSectionEntry {
    pub section: Option<RawSectionContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCard {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub link: Option<RawLink>,
    pub image: Option<RawMedia>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawValue {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<RawMedia>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAboutUsPage {
    pub locale: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<RawMedia>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_sections: Vec<RawSectionEntry>,
    pub section_one_video_link: Option<String>,
    pub section_one_play_image: Option<RawMedia>,
    #[serde(rename = "sectionOnePDF")]
    pub section_one_pdf: Option<RawMedia>,
    #[serde(deserialize_with = "null_as_default")]
    pub about_us_section_two_cards: Vec<RawCard>,
    #[serde(deserialize_with = "null_as_default")]
    pub cards_below_our_values: Vec<RawCard>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_our_values: Vec<RawValue>,
    pub our_values_image: Option<RawMedia>,
    pub our_values_title: Option<String>,
    pub our_values_link: Option<RawLink>,
    #[serde(rename = "messageFromCEOLink")]
    pub message_from_ceo_link: Option<RawLink>,
    pub our_leadership_image: Option<RawMedia>,
}
