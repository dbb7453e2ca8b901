use crate::domain::page::{AboutUsPage, Card, Link, Media, Section, Value};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MediaDto {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl From<Media> for MediaDto {
    fn from(media: Media) -> Self {
        Self {
            url: media.url,
            width: media.width,
            height: media.height,
            alt: media.alt,
            mime: media.mime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LinkDto {
    pub text: String,
    pub url: Option<String>,
    /// One of `primaryLink`, `secondaryLink`, `tertiaryLink`, `buttonLink`.
    pub variant: String,
}

impl From<Link> for LinkDto {
    fn from(link: Link) -> Self {
        Self {
            text: link.text,
            url: link.url,
            variant: link.variant.css_class().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    pub title: String,
    pub subtitle: Option<String>,
    /// Trusted CMS markup, rendered without sanitising.
    pub content: String,
    pub light_background: bool,
    pub link: Option<LinkDto>,
}

impl From<Section> for SectionDto {
    fn from(section: Section) -> Self {
        Self {
            title: section.title,
            subtitle: section.subtitle,
            content: section.content,
            light_background: section.light_background,
            link: section.link.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CardDto {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub link: Option<LinkDto>,
    pub image: Option<MediaDto>,
}

impl From<Card> for CardDto {
    fn from(card: Card) -> Self {
        Self {
            title: card.title,
            subtitle: card.subtitle,
            description: card.description,
            link: card.link.map(Into::into),
            image: card.image.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValueDto {
    pub title: String,
    pub description: String,
    pub icon: Option<MediaDto>,
}

impl From<Value> for ValueDto {
    fn from(value: Value) -> Self {
        Self {
            title: value.title,
            description: value.description,
            icon: value.icon.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsPageDto {
    pub locale: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    /// Never null: the configured fallback is used when the CMS has no image.
    pub hero_image: MediaDto,
    pub sections: Vec<SectionDto>,
    pub intro_video_link: Option<String>,
    pub intro_play_image: Option<MediaDto>,
    pub intro_pdf: Option<MediaDto>,
    pub section_two_cards: Vec<CardDto>,
    pub values_title: Option<String>,
    pub values_image: Option<MediaDto>,
    pub values_link: Option<LinkDto>,
    pub values: Vec<ValueDto>,
    pub cards_below_values: Vec<CardDto>,
    pub ceo_message_link: Option<LinkDto>,
    pub leadership_image: Option<MediaDto>,
}

impl AboutUsPageDto {
    pub fn from_page(page: AboutUsPage, fallback_hero: &Media) -> Self {
        let hero_image = page.hero_image_or(fallback_hero).clone().into();
        Self {
            locale: page.locale.code().to_string(),
            hero_title: page.hero_title,
            hero_subtitle: page.hero_subtitle,
            hero_image,
            sections: page.sections.into_iter().map(Into::into).collect(),
            intro_video_link: page.intro_video_link,
            intro_play_image: page.intro_play_image.map(Into::into),
            intro_pdf: page.intro_pdf.map(Into::into),
            section_two_cards: page.section_two_cards.into_iter().map(Into::into).collect(),
            values_title: page.values_title,
            values_image: page.values_image.map(Into::into),
            values_link: page.values_link.map(Into::into),
            values: page.values.into_iter().map(Into::into).collect(),
            cards_below_values: page.cards_below_values.into_iter().map(Into::into).collect(),
            ceo_message_link: page.ceo_message_link.map(Into::into),
            leadership_image: page.leadership_image.map(Into::into),
        }
    }
}
