// src/application/dto/serde_time.rs
//! RFC 3339 (UTC, millisecond precision) for timestamps in responses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn writes_utc_with_millis() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_string(&Wrapper { at }).unwrap();
        assert_eq!(json, r#"{"at":"2025-01-02T03:04:05.000Z"}"#);
    }

    #[test]
    fn reads_offsets() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"at":"2025-01-02T11:04:05+08:00"}"#).unwrap();
        assert_eq!(wrapper.at, Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
    }
}
