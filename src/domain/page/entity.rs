// src/domain/page/entity.rs
use crate::domain::locale::Locale;
use crate::domain::page::{link::Link, media::Media};

/// A titled block of CMS-authored content.
///
/// `content` is trusted editor HTML or markdown and is passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub light_background: bool,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub link: Option<Link>,
    pub image: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub title: String,
    pub description: String,
    pub icon: Option<Media>,
}

/// Everything the About Us page renders. Collections are never absent; a
/// record without them maps to empty vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutUsPage {
    pub locale: Locale,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: Option<Media>,
    pub sections: Vec<Section>,
    pub intro_video_link: Option<String>,
    pub intro_play_image: Option<Media>,
    pub intro_pdf: Option<Media>,
    pub section_two_cards: Vec<Card>,
    pub values_title: Option<String>,
    pub values_image: Option<Media>,
    pub values_link: Option<Link>,
    pub values: Vec<Value>,
    pub cards_below_values: Vec<Card>,
    pub ceo_message_link: Option<Link>,
    pub leadership_image: Option<Media>,
}

impl AboutUsPage {
    /// Hero image, or `fallback` when the CMS has none.
    pub fn hero_image_or<'a>(&'a self, fallback: &'a Media) -> &'a Media {
        self.hero_image.as_ref().unwrap_or(fallback)
    }
}
