use chrono::{NaiveDate, NaiveDateTime};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Naive date-time layouts accepted after RFC 3339 fails (HTML
/// `datetime-local` inputs omit the offset).
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp supplied by a client.
///
/// Accepts RFC 3339 (`2024-01-01T10:00:00Z`), offset-less date-times
/// (treated as UTC) and bare dates (`2024-01-01`, midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&chrono::Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter for timestamp fields that accept any layout understood by
/// [`parse_timestamp`].
///
/// ```ignore
/// #[serde(deserialize_with = "flexible_timestamp::deserialize")]
/// pub start_date: Timestamp,
/// ```
pub mod flexible_timestamp {
    use serde::{de, Deserialize, Deserializer};

    use super::{parse_timestamp, Timestamp};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
    }

    /// Optional variant; pair with `#[serde(default)]`.
    pub mod option {
        use serde::{de, Deserialize, Deserializer};

        use super::super::{parse_timestamp, Timestamp};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) => parse_timestamp(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'"))),
            }
        }
    }
}
