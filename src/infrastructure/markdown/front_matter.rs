use serde::{Deserialize, Deserializer};
use serde_yaml_ng::Value;

const FENCE: &str = "---";

/// Metadata block of an article file. Scalars are read leniently: an
/// unquoted `date: 2024-05-01` or a numeric title still come through as
/// strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FrontMatter {
    #[serde(deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub topic: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub location: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Splits a document into its front-matter and body. A document without an
/// opening fence has empty front-matter.
pub(super) fn split(document: &str) -> Result<(FrontMatter, &str), String> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let Some(rest) = document
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')))
    else {
        return Ok((FrontMatter::default(), document));
    };

    let (yaml, body) = closing_fence(rest).ok_or_else(|| "unterminated front-matter".to_string())?;
    let front_matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml_ng::from_str(yaml).map_err(|err| err.to_string())?
    };
    Ok((front_matter, body))
}

fn closing_fence(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
