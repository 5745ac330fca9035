use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::layout::LayoutError;

// Calendar date prefix of `YYYY-MM-DD` or an ISO-8601 timestamp. Anything after
// the date (time-of-day, offset) is ignored for layout.
static DATE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ][0-9:.]*(?:Z|[+-]\d{2}:?\d{2})?)?\s*$")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Maintenance,
    Complaint,
    Violation,
    Notice,
    Other(String),
}

impl Category {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "maintenance" => Self::Maintenance,
            "complaint" => Self::Complaint,
            "violation" => Self::Violation,
            "notice" => Self::Notice,
            _ => Self::Other(tag.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Complaint => "complaint",
            Self::Violation => "violation",
            Self::Notice => "notice",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub is_pii_redacted: bool,
}

/// A timestamped incident as served by the record-fetch collaborator.
///
/// Only `id`, `event_date` and `category` feed the layout; everything else is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "event_date_format")]
    pub event_date: NaiveDate,
    pub category: Category,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Record {
    pub fn new(id: impl Into<String>, event_date: NaiveDate, category: Category) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            event_date,
            category,
            created_at: None,
            attachments: Vec::new(),
        }
    }
}

pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let caps = DATE_PREFIX_RE.captures(value)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

mod event_date_format {
    use super::parse_event_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_event_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid eventDate `{raw}`")))
    }
}

/// Parses the record list served over the fetch boundary.
///
/// Accepts a bare JSON array or an object with an `events` array.
pub fn parse_records(input: &str) -> Result<Vec<Record>, LayoutError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|err| LayoutError::Records(err.to_string()))?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut fields) => match fields.remove("events") {
            Some(serde_json::Value::Array(items)) => items,
            _ => return Err(not_a_record_list()),
        },
        _ => return Err(not_a_record_list()),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item
                .get("id")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("#{index}"), str::to_string);
            serde_json::from_value(item)
                .map_err(|err| LayoutError::Records(format!("record {id}: {err}")))
        })
        .collect()
}

fn not_a_record_list() -> LayoutError {
    LayoutError::Records(
        "expected an array of records or an object with an `events` array".to_string(),
    )
}
