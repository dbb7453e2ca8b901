// src/domain/page/link.rs
use serde::Serialize;

/// Presentation style of a call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkVariant {
    Primary,
    Secondary,
    #[default]
    Tertiary,
    Button,
}

impl LinkVariant {
    /// Maps the CMS link-type label onto a variant. Only the four exact
    /// labels are recognised; everything else is `Tertiary`.
    pub fn from_cms_label(label: Option<&str>) -> Self {
        match label {
            Some("Primary Link") => Self::Primary,
            Some("Secondary Link") => Self::Secondary,
            Some("Tertiary Link") => Self::Tertiary,
            Some("Button Link") => Self::Button,
            _ => Self::Tertiary,
        }
    }

    /// Class name the front end uses for this variant.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Primary => "primaryLink",
            Self::Secondary => "secondaryLink",
            Self::Tertiary => "tertiaryLink",
            Self::Button => "buttonLink",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    /// The CMS may leave the target empty.
    pub url: Option<String>,
    pub variant: LinkVariant,
}
