//! Wildlife observation record

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use url::Url;

/// Identifier of an observation, used verbatim as its row's element id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ObservationId {
    Int(u64),
    Str(String),
}

impl ObservationId {
    /// Returns true when the id cannot identify a row (blank string).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Str(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ObservationId {
    fn from(n: u64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for ObservationId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ObservationId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// One wildlife sighting.
///
/// Deserializes from camelCase JSON. Every field except the flags may be
/// missing: absent or blank ids and URLs become `None` and the flags default
/// to `false`. URLs are kept exactly as given, so relative URLs stay relative.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sightings_lib::Observation;
///
/// let obs = Observation::new(67868131u64, "Muskrat", NaiveDate::from_ymd_opt(2020, 9, 18).unwrap())
///     .native(true);
///
/// assert_eq!(obs.flags(), [false, true, false, false]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Row identifier. A missing id is reported when the row is built.
    #[serde(default)]
    pub id: Option<ObservationId>,

    /// Thumbnail image.
    #[serde(default, deserialize_with = "optional_url")]
    pub photo_url: Option<String>,

    /// Detail page for this observation.
    #[serde(default, deserialize_with = "optional_url")]
    pub uri: Option<String>,

    #[serde(default, deserialize_with = "calendar_date")]
    pub date: Option<NaiveDate>,

    /// Display name of the observed subject.
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "optional_url")]
    pub wikipedia_url: Option<String>,

    #[serde(default)]
    pub is_endangered: bool,
    #[serde(default)]
    pub is_native: bool,
    #[serde(default)]
    pub is_threatened: bool,
    #[serde(default)]
    pub is_introduced: bool,
}

impl Observation {
    /// Creates an observation with no links and all flags cleared.
    pub fn new(id: impl Into<ObservationId>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Some(id.into()),
            photo_url: None,
            uri: None,
            date: Some(date),
            name: name.into(),
            wikipedia_url: None,
            is_endangered: false,
            is_native: false,
            is_threatened: false,
            is_introduced: false,
        }
    }

    pub fn photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    pub fn uri(mut self, url: impl Into<String>) -> Self {
        self.uri = Some(url.into());
        self
    }

    pub fn wikipedia_url(mut self, url: impl Into<String>) -> Self {
        self.wikipedia_url = Some(url.into());
        self
    }

    pub fn endangered(mut self, value: bool) -> Self {
        self.is_endangered = value;
        self
    }

    pub fn native(mut self, value: bool) -> Self {
        self.is_native = value;
        self
    }

    pub fn threatened(mut self, value: bool) -> Self {
        self.is_threatened = value;
        self
    }

    pub fn introduced(mut self, value: bool) -> Self {
        self.is_introduced = value;
        self
    }

    /// The id if it can identify a row.
    pub fn row_id(&self) -> Option<&ObservationId> {
        self.id.as_ref().filter(|id| !id.is_empty())
    }

    /// The classification flags in column order: endangered, native, threatened, introduced.
    pub fn flags(&self) -> [bool; 4] {
        [
            self.is_endangered,
            self.is_native,
            self.is_threatened,
            self.is_introduced,
        ]
    }
}

/// Keeps the URL text verbatim. Values that are not valid absolute or
/// relative URLs are logged but still kept.
fn optional_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match Url::parse(&raw) {
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => log::warn!("[observation] suspicious URL '{raw}': {e}"),
    }

    Ok(Some(raw))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping the date as observed
/// in the timestamp's own offset. `null` and blank strings mean no date.
fn calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    NaiveDate::parse_from_str(raw, crate::locale::MACHINE_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid date '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(ObservationId::from(67868131u64).to_string(), "67868131");
        assert_eq!(ObservationId::from("obs-1").to_string(), "obs-1");
    }

    #[test]
    fn test_id_is_empty() {
        assert!(ObservationId::from("").is_empty());
        assert!(ObservationId::from("  ").is_empty());
        assert!(!ObservationId::from(0u64).is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": 67868131,
            "photoUrl": "https://static.inaturalist.org/photos/109319291/square.jpg?1609877680",
            "uri": "https://www.inaturalist.org/observations/67868131",
            "date": "2020-09-18",
            "name": "Muskrat",
            "wikipediaUrl": "http://en.wikipedia.org/wiki/Muskrat",
            "isEndangered": false,
            "isNative": true,
            "isThreatened": false,
            "isIntroduced": false
        }"#;
        let obs: Observation = serde_json::from_str(json).unwrap();

        assert_eq!(obs.id, Some(ObservationId::Int(67868131)));
        assert_eq!(obs.name, "Muskrat");
        assert_eq!(obs.date, NaiveDate::from_ymd_opt(2020, 9, 18));
        assert_eq!(
            obs.photo_url.as_deref().unwrap(),
            "https://static.inaturalist.org/photos/109319291/square.jpg?1609877680"
        );
        assert_eq!(obs.flags(), [false, true, false, false]);
    }

    #[test]
    fn test_deserialize_sparse() {
        let json = r#"{"id": "abc", "date": "2021-03-04", "photoUrl": "", "wikipediaUrl": null}"#;
        let obs: Observation = serde_json::from_str(json).unwrap();

        assert_eq!(obs.id, Some(ObservationId::Str("abc".to_string())));
        assert!(obs.photo_url.is_none());
        assert!(obs.uri.is_none());
        assert!(obs.wikipedia_url.is_none());
        assert_eq!(obs.name, "");
        assert_eq!(obs.flags(), [false; 4]);
    }

    #[test]
    fn test_deserialize_timestamp_date() {
        let json = r#"{"id": 1, "date": "2020-09-18T23:30:00-04:00"}"#;
        let obs: Observation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.date, NaiveDate::from_ymd_opt(2020, 9, 18));
    }

    #[test]
    fn test_deserialize_missing_id_and_date() {
        let obs: Observation = serde_json::from_str(r#"{"name": "Muskrat", "date": null}"#).unwrap();
        assert_eq!(obs.id, None);
        assert_eq!(obs.date, None);
        assert!(obs.row_id().is_none());

        let blank: Observation = serde_json::from_str(r#"{"id": " ", "date": ""}"#).unwrap();
        assert!(blank.row_id().is_none());
        assert_eq!(blank.date, None);
    }

    #[test]
    fn test_urls_are_kept_verbatim() {
        let json = r#"{
            "id": 1,
            "photoUrl": "/photos/1.jpg",
            "uri": " https://example.org ",
            "wikipediaUrl": "not a url"
        }"#;
        let obs: Observation = serde_json::from_str(json).unwrap();

        assert_eq!(obs.photo_url.as_deref(), Some("/photos/1.jpg"));
        assert_eq!(obs.uri.as_deref(), Some("https://example.org"));
        assert_eq!(obs.wikipedia_url.as_deref(), Some("not a url"));
    }

    #[test]
    fn test_deserialize_rejects_bad_values() {
        assert!(serde_json::from_str::<Observation>(r#"{"id": 1, "date": "18/09/2020"}"#).is_err());
        assert!(serde_json::from_str::<Observation>(r#"{"id": 1, "isNative": "yes"}"#).is_err());
    }
}
