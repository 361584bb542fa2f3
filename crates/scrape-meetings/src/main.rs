use anyhow::{Context, Result};
use chrono::Local;
use city_meetings::{
    get_default_meetings_dir, meetings_filename, save_meetings, start_url, Board, Config,
    MeetingFetcher, MeetingParser, MeetingStatus, MeetingsData, SiteConfig, SitePolicy,
};
use clap::Parser;
use std::io::{self as stdio, Write};
use std::path::PathBuf;

fn prompt_board_selection() -> Result<Board> {
    println!("Which board?");
    println!("  1) City Council");
    println!("  2) Planning Commission");
    print!("\nEnter your choice (1-2): ");
    stdio::stdout().flush()?;

    let mut input = String::new();
    stdio::stdin().read_line(&mut input)?;

    match input.trim() {
        "1" => Ok(Board::CityCouncil),
        "2" => Ok(Board::PlanningCommission),
        _ => anyhow::bail!("Invalid selection. Please choose 1 or 2."),
    }
}

#[derive(Parser)]
#[command(name = "scrape-meetings")]
#[command(about = "Scrape Stevenson, WA meeting listings into normalized JSON records")]
struct Args {
    /// Board to scrape (council, commission)
    #[arg(short, long, conflicts_with = "site")]
    board: Option<String>,

    /// JSON file with a custom site configuration
    #[arg(long)]
    site: Option<PathBuf>,

    /// Stop after this many listing pages
    #[arg(short, long)]
    max_pages: Option<usize>,

    /// Where to write the JSON file (defaults to the local data directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let args = Args::parse();
    let config = Config::from_env()?;

    let site = if let Some(path) = &args.site {
        SiteConfig::from_json_file(path)?
    } else if let Some(slug) = &args.board {
        Board::from_slug(slug)
            .ok_or_else(|| {
                anyhow::anyhow!("Invalid board: {}. Use 'council' or 'commission'", slug)
            })?
            .site()
    } else {
        prompt_board_selection()?.site()
    };

    // Progress goes to stderr when stdout carries the JSON
    let progress = |line: String| {
        if args.stdout {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    progress(format!("\n✓ Selected: {} (board {})", site.agency, site.board_id));

    let today = Local::now().date_naive();
    let url = start_url(&site, today)?;
    log::debug!("Start URL: {}", url);

    progress("\n🌐 Fetching meeting listings...".to_string());
    let fetcher = MeetingFetcher::new(config.user_agent.as_deref())?;
    let parser = MeetingParser::new(site.clone(), SitePolicy::stevenson());
    let max_pages = args.max_pages.or(config.max_pages);
    let meetings = fetcher
        .crawl(&parser, url, max_pages)
        .await
        .context("Failed to scrape meetings")?;

    if meetings.is_empty() {
        progress(format!("No meetings found for {}.", site.board_name));
        return Ok(());
    }

    progress(format!("✓ Found {} meetings", meetings.len()));
    for status in [
        MeetingStatus::Passed,
        MeetingStatus::Tentative,
        MeetingStatus::Upcoming,
        MeetingStatus::Cancelled,
    ] {
        let count = meetings.iter().filter(|m| m.status == status).count();
        if count > 0 {
            progress(format!("  {:>4} {}", count, status.as_str()));
        }
    }
    let undated = meetings.iter().filter(|m| m.start.is_none()).count();
    if undated > 0 {
        progress(format!("\n⚠ {} meetings had no parseable start time", undated));
    }

    let data = MeetingsData::new(site.name.clone(), meetings);

    if args.stdout {
        let json = serde_json::to_string_pretty(&data).context("Failed to serialize meetings")?;
        println!("{}", json);
        return Ok(());
    }

    let filepath = match args.output {
        Some(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
                .ok_or_else(|| anyhow::anyhow!("Invalid output path: {}", path.display()))?;
            save_meetings(&data, &dir, &filename)?
        }
        None => {
            let dir = match config.output_dir {
                Some(dir) => dir,
                None => get_default_meetings_dir()?,
            };
            save_meetings(&data, &dir, &meetings_filename(&site.name, today))?
        }
    };

    progress(format!("\n✅ Meetings saved to: {}", filepath.display()));

    Ok(())
}
