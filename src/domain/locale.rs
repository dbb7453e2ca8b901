// src/domain/locale.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Locales the site is published in. The set is closed: every
/// locale-taking route validates against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ms,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ms];

    pub fn parse(code: &str) -> DomainResult<Self> {
        match code {
            "en" => Ok(Self::En),
            "ms" => Ok(Self::Ms),
            other => Err(DomainError::UnsupportedLocale(other.to_string())),
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
        }
    }

    /// BCP 47 tag used for `inLanguage` in structured data.
    pub const fn language_tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Ms => "ms-MY",
        }
    }

    /// Open Graph locale (`og:locale`).
    pub const fn open_graph(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Ms => "ms_MY",
        }
    }

    pub const fn alternate(self) -> Self {
        match self {
            Self::En => Self::Ms,
            Self::Ms => Self::En,
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
