use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use url::Url;

use crate::models::MeetingLink;

static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("invalid selector: td"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("invalid selector: a[href]"));

/// Turns the document columns of a listing row into labelled links.
///
/// Columns before `first_column` hold the date and title. Each column
/// after that is paired with the next label; a column without an anchor
/// is skipped and columns beyond the last label are ignored.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    labels: Vec<String>,
    first_column: usize,
}

impl LinkExtractor {
    pub fn new(labels: Vec<String>, first_column: usize) -> Self {
        Self {
            labels,
            first_column,
        }
    }

    pub fn stevenson() -> Self {
        let labels = ["Agenda", "Agenda Packet", "Minutes", "Video"]
            .into_iter()
            .map(String::from)
            .collect();
        Self::new(labels, 2)
    }

    pub fn extract(&self, row: ElementRef<'_>, base: &Url) -> Vec<MeetingLink> {
        let mut links = Vec::new();

        for (label, cell) in self
            .labels
            .iter()
            .zip(row.select(&CELL).skip(self.first_column))
        {
            let Some(href) = cell
                .select(&ANCHOR)
                .filter_map(|a| a.value().attr("href"))
                .map(str::trim)
                .find(|href| !href.is_empty())
            else {
                continue;
            };

            match base.join(href) {
                Ok(url) => links.push(MeetingLink {
                    href: url.to_string(),
                    title: label.clone(),
                }),
                Err(e) => log::warn!("Skipping {} link {:?}: {}", label, href, e),
            }
        }

        links
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::stevenson()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn base() -> Url {
        Url::parse("https://www.ci.stevenson.wa.us/meetings?page=1").unwrap()
    }

    fn extract(row_html: &str) -> Vec<MeetingLink> {
        let html = Html::parse_document(&format!("<table><tbody>{row_html}</tbody></table>"));
        let tr = Selector::parse("tr").unwrap();
        let row = html.select(&tr).next().unwrap();
        LinkExtractor::stevenson().extract(row, &base())
    }

    #[test]
    fn test_three_data_columns() {
        let links = extract(
            r#"<tr>
                <td>Jan 15</td><td>Council Meeting</td>
                <td><a href="/files/agenda.pdf">View</a></td>
                <td><a href="/files/packet.pdf">View</a></td>
                <td><a href="https://docs.example.org/minutes.pdf">View</a></td>
            </tr>"#,
        );

        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Agenda", "Agenda Packet", "Minutes"]);
        assert_eq!(links[0].href, "https://www.ci.stevenson.wa.us/files/agenda.pdf");
        assert_eq!(links[2].href, "https://docs.example.org/minutes.pdf");
    }

    #[test]
    fn test_cell_without_anchor_is_skipped() {
        let links = extract(
            r#"<tr>
                <td>Jan 15</td><td>Council Meeting</td>
                <td><a href="agenda.pdf">View</a></td>
                <td></td>
                <td><a href="minutes.pdf">View</a></td>
            </tr>"#,
        );

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Agenda");
        assert_eq!(links[1].title, "Minutes");
        assert_eq!(links[1].href, "https://www.ci.stevenson.wa.us/minutes.pdf");
    }

    #[test]
    fn test_columns_beyond_labels_are_ignored() {
        let links = extract(
            r#"<tr>
                <td>Jan 15</td><td>Council Meeting</td>
                <td><a href="/a">a</a></td><td><a href="/b">b</a></td>
                <td><a href="/c">c</a></td><td><a href="/d">d</a></td>
                <td><a href="/e">e</a></td>
            </tr>"#,
        );

        assert_eq!(links.len(), 4);
        assert_eq!(links[3].title, "Video");
        assert_eq!(links[3].href, "https://www.ci.stevenson.wa.us/d");
    }

    #[test]
    fn test_title_columns_never_produce_links() {
        let links = extract(
            r#"<tr>
                <td><a href="/date">Jan 15</a></td>
                <td><a href="/title">Council Meeting</a></td>
            </tr>"#,
        );

        assert!(links.is_empty());
    }

    #[test]
    fn test_empty_href_is_skipped() {
        let links = extract(
            r#"<tr>
                <td>Jan 15</td><td>Council Meeting</td>
                <td><a href="">View</a></td>
                <td><a href="/packet.pdf">View</a></td>
            </tr>"#,
        );

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "Agenda Packet");
    }
}
