use std::sync::LazyLock;

use chrono::{Local, NaiveDateTime};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::classification::ClassificationTable;
use crate::datetime::parse_naive_datetime;
use crate::id::meeting_id;
use crate::links::LinkExtractor;
use crate::models::{MeetingRecord, ParsedPage};
use crate::site::SiteConfig;
use crate::status::{StatusInput, StatusResolver};
use crate::title::TitleCleaner;

// The listing alternates row classes; two template variants exist for titles and pagers
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.even, tr.odd").expect("invalid selector: rows"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td.views-field-title, .views-field-title").expect("invalid selector: title")
});
static DATE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("span[property='dc:date']").expect("invalid selector: date")
});
static NEXT_PAGE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".pager-next a, .pager__item--next a").expect("invalid selector: next page")
});

/// The per-site pieces a listing parser is assembled from
#[derive(Debug, Clone, Default)]
pub struct SitePolicy {
    pub titles: TitleCleaner,
    pub links: LinkExtractor,
    pub classifications: ClassificationTable,
    pub status: StatusResolver,
}

impl SitePolicy {
    pub fn stevenson() -> Self {
        Self {
            titles: TitleCleaner::stevenson(),
            links: LinkExtractor::stevenson(),
            classifications: ClassificationTable::stevenson(),
            status: StatusResolver::stevenson(),
        }
    }
}

/// Turns one page of the meetings listing into records.
///
/// Parsing holds no state between pages; the caller decides whether to
/// follow the next-page link.
#[derive(Debug, Clone)]
pub struct MeetingParser {
    site: SiteConfig,
    policy: SitePolicy,
}

impl MeetingParser {
    pub fn new(site: SiteConfig, policy: SitePolicy) -> Self {
        Self { site, policy }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn parse_page(&self, html: &str, source: &Url) -> ParsedPage {
        self.parse_page_at(html, source, Local::now().naive_local())
    }

    pub fn parse_page_at(&self, html: &str, source: &Url, now: NaiveDateTime) -> ParsedPage {
        let document = Html::parse_document(html);

        let meetings: Vec<MeetingRecord> = self.meetings(&document, source, now).collect();
        let next_page = self.next_page(&document, source);

        log::debug!(
            "Parsed {} meetings from {} (next page: {})",
            meetings.len(),
            source,
            next_page.as_ref().map_or("none", |url| url.as_str())
        );

        ParsedPage {
            meetings,
            next_page,
        }
    }

    /// Records in document order, built as the iterator is advanced.
    pub fn meetings<'a>(
        &'a self,
        document: &'a Html,
        source: &'a Url,
        now: NaiveDateTime,
    ) -> impl Iterator<Item = MeetingRecord> + 'a {
        let rows: Vec<ElementRef<'a>> = document.select(&ROW).collect();
        if rows.is_empty() {
            log::warn!("No meetings found at {}", source);
        }

        rows.into_iter()
            .map(move |row| self.parse_row(row, source, now))
    }

    pub fn next_page(&self, document: &Html, source: &Url) -> Option<Url> {
        let href = document
            .select(&NEXT_PAGE)
            .find_map(|a| a.value().attr("href"))?
            .trim();
        if href.is_empty() {
            return None;
        }

        match source.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Ignoring next page link {:?} on {}: {}", href, source, e);
                None
            }
        }
    }

    fn parse_row(&self, row: ElementRef<'_>, source: &Url, now: NaiveDateTime) -> MeetingRecord {
        let title = self.policy.titles.clean(row_title(row).as_deref());
        let start = row_start(row);

        let status = self.policy.status.resolve(
            &StatusInput {
                title: &title,
                description: &self.site.description,
                notes: "",
                start,
            },
            now,
        );
        let id = meeting_id(&self.site.name, start, &title);

        MeetingRecord {
            id,
            title,
            description: self.site.description.clone(),
            classification: self.policy.classifications.classify(self.site.board_id),
            start,
            end: None,
            all_day: false,
            time_notes: String::new(),
            location: self.site.location.clone(),
            links: self.policy.links.extract(row, source),
            source: source.to_string(),
            status,
        }
    }
}

/// First non-blank text sitting directly in a title cell
fn row_title(row: ElementRef<'_>) -> Option<String> {
    row.select(&TITLE)
        .flat_map(|cell| cell.children())
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

fn row_start(row: ElementRef<'_>) -> Option<NaiveDateTime> {
    row.select(&DATE)
        .find_map(|span| span.value().attr("content"))
        .and_then(parse_naive_datetime)
}
