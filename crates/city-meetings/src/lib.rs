// Public modules
pub mod classification;
pub mod config;
pub mod datetime;
pub mod fetcher;
pub mod id;
pub mod io;
pub mod links;
pub mod models;
pub mod page;
pub mod request;
pub mod site;
pub mod status;
pub mod title;

// Re-export commonly used types
pub use classification::ClassificationTable;
pub use config::Config;
pub use datetime::parse_naive_datetime;
pub use fetcher::MeetingFetcher;
pub use id::meeting_id;
pub use io::{get_default_meetings_dir, load_meetings, meetings_filename, save_meetings};
pub use links::LinkExtractor;
pub use models::{
    Classification, Location, MeetingLink, MeetingRecord, MeetingStatus, MeetingsData, ParsedPage,
};
pub use page::{MeetingParser, SitePolicy};
pub use request::start_url;
pub use site::{Board, ConfigError, RawSiteConfig, SiteConfig};
pub use status::{StatusInput, StatusOverride, StatusResolver};
pub use title::{PrefixRule, TitleCleaner};
