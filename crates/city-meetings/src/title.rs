use regex::Regex;

/// A leading-noise pattern and what it looks like on the site
#[derive(Debug, Clone)]
pub struct PrefixRule {
    pub pattern: Regex,
    pub description: &'static str,
}

/// Strips date prefixes that editors type in front of meeting titles.
///
/// Every rule is applied once, in order, to the output of the previous
/// one. A title carrying two kinds of noise ("Wednesday, June 5- June
/// 2019 Workshop") is cleaned in a single pass, but a rule never runs
/// twice.
#[derive(Debug, Clone)]
pub struct TitleCleaner {
    rules: Vec<PrefixRule>,
}

const STEVENSON_RULES: &[(&str, &str)] = &[
    (
        r"^(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday),?\s+[A-Za-z]+\s+\d{1,2}\s*-\s*",
        "weekday, month and day with trailing dash: \"Wednesday, February 5-\"",
    ),
    (
        r"^[A-Za-z]+\s+\d{1,2}\s*&\s*\d{1,2}\s+",
        "month and two days: \"May 27 & 28 \"",
    ),
    (
        r"^[A-Za-z]+\s+\d{1,2}\s*-\s*\d{1,2},?\s+\d{4}\s+",
        "month, day range and year: \"October 19-20, 2018 \"",
    ),
    (
        r"^[A-Za-z]+\s+\d{1,2}(?:st|nd|rd|th)\s+",
        "month and ordinal day: \"March 3rd \"",
    ),
    (
        r"^[A-Za-z]+\s+\d{1,2}(?:st|nd|rd|th),?\s+\d{4}\s+",
        "month, ordinal day and year: \"June 5th, 2019 \"",
    ),
    (
        r"^[A-Za-z]+\s+\d{1,2},\s+\d{4}\s*-?\s*",
        "month, day and year with optional dash: \"July 16, 2019 - \"",
    ),
    (
        r"^[A-Za-z]+\s+\d{1,2}\s*-\s*",
        "month and day with trailing dash: \"February 25-\"",
    ),
    (
        r"^[A-Za-z]+\s+\d{4}\s+",
        "month and year: \"January 2026 \"",
    ),
];

impl TitleCleaner {
    pub fn new(rules: Vec<PrefixRule>) -> Self {
        Self { rules }
    }

    /// Rules observed on the Stevenson meetings listing
    pub fn stevenson() -> Self {
        let rules = STEVENSON_RULES
            .iter()
            .map(|&(pattern, description)| PrefixRule {
                pattern: Regex::new(pattern).expect("invalid regex: title prefix"),
                description,
            })
            .collect();

        Self { rules }
    }

    /// Appends a rule that runs after the existing ones.
    pub fn with_rule(
        mut self,
        pattern: &str,
        description: &'static str,
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(pattern)?;
        self.rules.push(PrefixRule {
            pattern,
            description,
        });
        Ok(self)
    }

    pub fn rules(&self) -> &[PrefixRule] {
        &self.rules
    }

    pub fn clean(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };

        let mut title = raw.trim().to_string();
        for rule in &self.rules {
            // Patterns are anchored, so at most one match is removed per rule
            title = rule.pattern.replace(&title, "").into_owned();
        }

        title.trim().to_string()
    }
}

impl Default for TitleCleaner {
    fn default() -> Self {
        Self::stevenson()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        TitleCleaner::stevenson().clean(Some(raw))
    }

    #[test]
    fn test_weekday_prefix() {
        assert_eq!(clean("Wednesday, February 5- Budget Workshop"), "Budget Workshop");
    }

    #[test]
    fn test_day_range_with_year() {
        assert_eq!(clean("October 19-20, 2018 Council Retreat"), "Council Retreat");
    }

    #[test]
    fn test_none_yields_empty() {
        assert_eq!(TitleCleaner::stevenson().clean(None), "");
    }

    #[test]
    fn test_two_days_joined_by_ampersand() {
        assert_eq!(clean("May 27 & 28 Council Retreat"), "Council Retreat");
    }

    #[test]
    fn test_ordinal_day() {
        assert_eq!(clean("March 3rd Special Meeting"), "Special Meeting");
    }

    #[test]
    fn test_ordinal_day_with_year() {
        assert_eq!(clean("June 5th, 2019 Joint Workshop"), "Joint Workshop");
    }

    #[test]
    fn test_day_and_year_with_dash() {
        assert_eq!(
            clean("July 16, 2019 - Regular Council Meeting"),
            "Regular Council Meeting"
        );
        assert_eq!(clean("July 16, 2019 Regular Council Meeting"), "Regular Council Meeting");
    }

    #[test]
    fn test_month_day_dash() {
        assert_eq!(clean("February 25- Regular Meeting"), "Regular Meeting");
    }

    #[test]
    fn test_month_year() {
        assert_eq!(clean("January 2026 Council Meeting"), "Council Meeting");
    }

    #[test]
    fn test_compound_noise_is_stripped_in_one_pass() {
        assert_eq!(clean("Wednesday, June 5- June 2019 Workshop"), "Workshop");
    }

    #[test]
    fn test_plain_title_untouched() {
        assert_eq!(clean("  City Council Regular Meeting "), "City Council Regular Meeting");
    }

    #[test]
    fn test_cleaning_is_idempotent_on_listing_titles() {
        let corpus = [
            "Wednesday, February 5- Budget Workshop",
            "October 19-20, 2018 Council Retreat",
            "May 27 & 28 Council Retreat",
            "March 3rd Special Meeting",
            "June 5th, 2019 Joint Workshop",
            "July 16, 2019 - Regular Council Meeting",
            "February 25- Regular Meeting",
            "January 2026 Council Meeting",
            "Regular Council Meeting - CANCELLED",
            "Planning Commission Meeting",
        ];
        let cleaner = TitleCleaner::stevenson();

        for raw in corpus {
            let once = cleaner.clean(Some(raw));
            assert_eq!(cleaner.clean(Some(&once)), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_with_rule_appends_custom_pattern() {
        let cleaner = TitleCleaner::stevenson()
            .with_rule(r"^\d{1,2}/\d{1,2}/\d{4}\s+", "numeric date: \"1/15/2026 \"")
            .unwrap();

        assert_eq!(cleaner.rules().len(), STEVENSON_RULES.len() + 1);
        assert_eq!(cleaner.clean(Some("1/15/2026 Special Meeting")), "Special Meeting");
    }

    #[test]
    fn test_with_rule_rejects_bad_pattern() {
        assert!(TitleCleaner::stevenson().with_rule("(", "broken").is_err());
    }
}
