use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use url::Url;

use crate::site::SiteConfig;

/// How far ahead of today the listing is queried
const LOOKAHEAD_DAYS: i64 = 730;

/// Earliest meeting date the listing is queried for
static HISTORY_START: LazyLock<NaiveDate> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(2018, 1, 1).expect("invalid date: history start")
});

/// Build the listing URL covering 2018-01-01 through two years from `today`.
pub fn start_url(site: &SiteConfig, today: NaiveDate) -> Result<Url> {
    let start = *HISTORY_START;
    let end = today + Duration::days(LOOKAHEAD_DAYS);

    let params = [
        ("date_filter[value][month]", start.month().to_string()),
        ("date_filter[value][day]", start.day().to_string()),
        ("date_filter[value][year]", start.year().to_string()),
        ("date_filter_1[value][month]", end.month().to_string()),
        ("date_filter_1[value][day]", end.day().to_string()),
        ("date_filter_1[value][year]", end.year().to_string()),
        ("field_microsite_tid", "All".to_string()),
        ("field_microsite_tid_1", site.board_id.to_string()),
    ];

    let query = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    let url = format!("{}/?{}", site.base_url.trim_end_matches('/'), query);
    Url::parse(&url).with_context(|| format!("Invalid listing URL: {}", url))
}
