use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\^]+").expect("invalid regex: id non-word"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid regex: id whitespace"));

const UNDATED: &str = "000000000000";

/// Stable identifier: `<site>/<start as YYYYMMDDHHMM>/<title_slug>`
pub fn meeting_id(site_name: &str, start: Option<NaiveDateTime>, title: &str) -> String {
    let spaced = NON_WORD.replace_all(title, " ");
    let slug = WHITESPACE.replace_all(spaced.trim(), "_").to_lowercase();

    let stamp = start
        .map(|dt| dt.format("%Y%m%d%H%M").to_string())
        .unwrap_or_else(|| UNDATED.to_string());

    format!("{}/{}/{}", site_name, stamp, slug)
}
