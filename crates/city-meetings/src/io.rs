use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::MeetingsData;

/// Get the default directory for storing scraped meetings
pub fn get_default_meetings_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .context("Could not determine local data directory")?
        .join("city-meetings")
        .join("meetings");

    Ok(data_dir)
}

pub fn meetings_filename(site_name: &str, date: NaiveDate) -> String {
    format!("{}_{}.json", site_name, date.format("%Y-%m-%d"))
}

/// Save meeting data as pretty JSON inside `dir`
pub fn save_meetings(data: &MeetingsData, dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    let filepath = dir.join(filename);

    let json = serde_json::to_string_pretty(data).context("Failed to serialize meetings")?;

    fs::write(&filepath, json)
        .with_context(|| format!("Failed to write meetings file: {}", filepath.display()))?;

    Ok(filepath)
}

/// Load meeting data from a JSON file
pub fn load_meetings(filepath: &Path) -> Result<MeetingsData> {
    if !filepath.exists() {
        anyhow::bail!("Meetings file not found: {}", filepath.display());
    }

    let content = fs::read_to_string(filepath)
        .with_context(|| format!("Failed to read meetings file: {}", filepath.display()))?;

    let data: MeetingsData = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse meetings JSON from {}. The file may be corrupted or not a meetings file.",
            filepath.display()
        )
    })?;

    if data.version != "1.0" {
        anyhow::bail!(
            "Unsupported meetings file version: {}. Expected 1.0. Please re-run scrape-meetings.",
            data.version
        );
    }

    Ok(data)
}
