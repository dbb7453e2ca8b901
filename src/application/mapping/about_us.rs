// src/application/mapping/about_us.rs
use crate::application::mapping::media::MediaUrlResolver;
use crate::application::ports::records::{
    RawAboutUsPage, RawCard, RawLink, RawSectionContent, RawValue,
};
use crate::domain::locale::Locale;
use crate::domain::page::{AboutUsPage, Card, Link, LinkVariant, Section, Value};

/// `None` in, `None` out. Otherwise every collection is mapped in CMS order
/// and missing collections become empty vectors.
pub fn to_about_us_page(
    record: Option<RawAboutUsPage>,
    requested: Locale,
    media: &MediaUrlResolver,
) -> Option<AboutUsPage> {
    let record = record?;
    let locale = record
        .locale
        .as_deref()
        .and_then(|code| Locale::parse(code).ok())
        .unwrap_or(requested);

    let sections = record
        .all_sections
        .into_iter()
        .filter_map(|entry| entry.section)
        .map(to_section)
        .collect();

    Some(AboutUsPage {
        locale,
        hero_title: record.hero_title.unwrap_or_default(),
        hero_subtitle: record.hero_subtitle.unwrap_or_default(),
        hero_image: record.hero_image.as_ref().and_then(|m| media.media(m)),
        sections,
        intro_video_link: non_empty(record.section_one_video_link),
        intro_play_image: record.section_one_play_image.as_ref().and_then(|m| media.media(m)),
        intro_pdf: record.section_one_pdf.as_ref().and_then(|m| media.media(m)),
        section_two_cards: to_cards(record.about_us_section_two_cards, media),
        values_title: non_empty(record.our_values_title),
        values_image: record.our_values_image.as_ref().and_then(|m| media.media(m)),
        values_link: record.our_values_link.and_then(to_link),
        values: record
            .all_our_values
            .into_iter()
            .map(|value| to_value(value, media))
            .collect(),
        cards_below_values: to_cards(record.cards_below_our_values, media),
        ceo_message_link: record.message_from_ceo_link.and_then(to_link),
        leadership_image: record.our_leadership_image.as_ref().and_then(|m| media.media(m)),
    })
}

fn to_section(raw: RawSectionContent) -> Section {
    let link = build_link(raw.link_text_to_display, raw.link, raw.link_type.as_deref());
    Section {
        title: raw.title.unwrap_or_default(),
        subtitle: non_empty(raw.subtitle),
        content: raw.content.unwrap_or_default(),
        light_background: raw.background_color_light.unwrap_or(false),
        link,
    }
}

fn to_cards(raw: Vec<RawCard>, media: &MediaUrlResolver) -> Vec<Card> {
    raw.into_iter()
        .map(|card| Card {
            title: card.title.unwrap_or_default(),
            subtitle: non_empty(card.sub_title),
            description: card.description.unwrap_or_default(),
            link: card.link.and_then(to_link),
            image: card.image.as_ref().and_then(|m| media.media(m)),
        })
        .collect()
}

fn to_value(raw: RawValue, media: &MediaUrlResolver) -> Value {
    Value {
        title: raw.title.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        icon: raw.icon.as_ref().and_then(|m| media.media(m)),
    }
}

fn to_link(raw: RawLink) -> Option<Link> {
    build_link(raw.text_to_display, raw.url, raw.link_type.as_deref())
}

// A link with neither text nor target is omitted rather than rendered empty.
fn build_link(text: Option<String>, url: Option<String>, label: Option<&str>) -> Option<Link> {
    let text = non_empty(text);
    let url = non_empty(url);
    if text.is_none() && url.is_none() {
        return None;
    }
    Some(Link {
        text: text.unwrap_or_default(),
        url,
        variant: LinkVariant::from_cms_label(label),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
