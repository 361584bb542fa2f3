use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Location;

pub const DEFAULT_BOARD_ID: u32 = 27;
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const DEFAULT_BASE_URL: &str = "https://www.ci.stevenson.wa.us/meetings";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{site} must define the following field(s): {}.", .fields.join(", "))]
    MissingFields {
        site: String,
        fields: Vec<&'static str>,
    },
}

/// Validated settings for one scraped body
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub agency: String,
    pub name: String,
    pub board_name: String,
    pub location: Location,
    pub description: String,
    pub board_id: u32,
    pub timezone: String,
    pub base_url: String,
}

/// Site settings as written in a config file, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSiteConfig {
    pub agency: Option<String>,
    pub name: Option<String>,
    pub board_name: Option<String>,
    pub location: Option<Location>,
    pub description: Option<String>,
    pub board_id: Option<u32>,
    pub timezone: Option<String>,
    pub base_url: Option<String>,
}

impl RawSiteConfig {
    /// Checks every required field and reports all missing ones together.
    pub fn validate(self) -> Result<SiteConfig, ConfigError> {
        let mut missing = Vec::new();
        if self.agency.is_none() {
            missing.push("agency");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.board_name.is_none() {
            missing.push("board_name");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.description.is_none() {
            missing.push("description");
        }

        match (
            self.agency,
            self.name,
            self.board_name,
            self.location,
            self.description,
        ) {
            (Some(agency), Some(name), Some(board_name), Some(location), Some(description)) => {
                Ok(SiteConfig {
                    agency,
                    name,
                    board_name,
                    location,
                    description,
                    board_id: self.board_id.unwrap_or(DEFAULT_BOARD_ID),
                    timezone: self
                        .timezone
                        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
                    base_url: self
                        .base_url
                        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                })
            }
            (_, name, ..) => Err(ConfigError::MissingFields {
                site: name.unwrap_or_else(|| "site config".to_string()),
                fields: missing,
            }),
        }
    }
}

impl SiteConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config: {}", path.display()))?;

        let raw: RawSiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse site config JSON from {}", path.display()))?;

        raw.validate()
            .with_context(|| format!("Invalid site config: {}", path.display()))
    }
}

/// Bodies publishing on the Stevenson meetings listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    CityCouncil,
    PlanningCommission,
}

impl Board {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "council" => Some(Board::CityCouncil),
            "commission" => Some(Board::PlanningCommission),
            _ => None,
        }
    }

    pub fn site(&self) -> SiteConfig {
        let (agency, name, board_name, board_id) = match self {
            Board::CityCouncil => (
                "Stevenson City Council",
                "colgo_stevenson_city",
                "City Council",
                27,
            ),
            Board::PlanningCommission => (
                "Stevenson Planning Commission",
                "colgo_stevenson_planning",
                "Planning Commission",
                28,
            ),
        };

        SiteConfig {
            agency: agency.to_string(),
            name: name.to_string(),
            board_name: board_name.to_string(),
            location: Location::new(
                "Stevenson City Hall Council Chambers",
                "7121 East Loop Road, Stevenson, WA 98648",
            ),
            description: String::new(),
            board_id,
            timezone: DEFAULT_TIMEZONE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_applies_defaults() {
        let site: SiteConfig = serde_json::from_str::<RawSiteConfig>(
            r#"{
                "agency": "Stevenson City Council",
                "name": "colgo_stevenson_city",
                "board_name": "City Council",
                "location": {"name": "City Hall", "address": "7121 East Loop Road"},
                "description": ""
            }"#,
        )
        .unwrap()
        .validate()
        .unwrap();

        assert_eq!(site.board_id, 27);
        assert_eq!(site.timezone, "America/Los_Angeles");
        assert_eq!(site.base_url, DEFAULT_BASE_URL);
        assert_eq!(site.location.name, "City Hall");
    }

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let raw = RawSiteConfig {
            name: Some("colgo_stevenson_city".to_string()),
            board_name: Some("City Council".to_string()),
            ..Default::default()
        };

        let err = raw.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingFields {
                site: "colgo_stevenson_city".to_string(),
                fields: vec!["agency", "location", "description"],
            }
        );
        assert_eq!(
            err.to_string(),
            "colgo_stevenson_city must define the following field(s): agency, location, description."
        );
    }

    #[test]
    fn test_validate_empty_config() {
        let err = RawSiteConfig::default().validate().unwrap_err();
        let ConfigError::MissingFields { site, fields } = err;
        assert_eq!(site, "site config");
        assert_eq!(fields.len(), 5);
    }

    #[test]
    fn test_board_presets() {
        assert_eq!(Board::from_slug("council"), Some(Board::CityCouncil));
        assert_eq!(Board::from_slug("commission"), Some(Board::PlanningCommission));
        assert_eq!(Board::from_slug("library"), None);

        let site = Board::PlanningCommission.site();
        assert_eq!(site.board_id, 28);
        assert_eq!(
            site.location.address,
            "7121 East Loop Road, Stevenson, WA 98648"
        );
    }
}
