use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use url::Url;

/// Category of the body holding the meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "City Council")]
    CityCouncil,
    #[serde(rename = "Commission")]
    Commission,
    #[serde(rename = "Not classified")]
    NotClassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Cancelled,
    Passed,
    Tentative,
    Upcoming,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Cancelled => "cancelled",
            MeetingStatus::Passed => "passed",
            MeetingStatus::Tentative => "tentative",
            MeetingStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A document attached to a meeting (agenda, minutes, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingLink {
    pub href: String,
    pub title: String,
}

/// One normalized meeting, built from a single listing row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub classification: Classification,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub time_notes: String,
    pub location: Location,
    pub links: Vec<MeetingLink>,
    pub source: String,
    pub status: MeetingStatus,
}

/// Everything extracted from one listing page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    pub meetings: Vec<MeetingRecord>,
    pub next_page: Option<Url>,
}

/// Serialized output of a crawl
#[derive(Debug, Serialize, Deserialize)]
pub struct MeetingsData {
    pub version: String,
    pub created_at: String,
    pub site: String,
    pub meetings: Vec<MeetingRecord>,
}

impl MeetingsData {
    pub fn new(site: impl Into<String>, meetings: Vec<MeetingRecord>) -> Self {
        Self {
            version: "1.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            site: site.into(),
            meetings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_serializes_to_display_names() {
        assert_eq!(
            serde_json::to_string(&Classification::CityCouncil).unwrap(),
            "\"City Council\""
        );
        assert_eq!(
            serde_json::to_string(&Classification::NotClassified).unwrap(),
            "\"Not classified\""
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MeetingStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(MeetingStatus::Tentative.as_str(), "tentative");
    }
}
