//! # Catalog Report
//!
//! Prints a catalog the way the site would show it, before it goes live.
//!
//! ## Usage
//!
//! Ranked and filtered with the site defaults.
//! ```sh
//! cargo run -p process -- data/course-data-2023.json
//! ```
//!
//! Everything, ten per section, failing on any catalog issue.
//! ```sh
//! cargo run -p process -- data/course-data-2023.json --all --limit 10 --strict
//! ```
use anyhow::{Context, Result, bail};
use catalog::{CourseLimit, DisplayFilters, filter, load_catalog, rank, validate::validate};
use clap::Parser;
use tracing::info;

pub mod utils;

use utils::Report;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct ReportArgs {
    /// Catalog path or http(s) URL
    pub source: String,

    #[arg(long)]
    pub language: bool,

    #[arg(long)]
    pub honors: bool,

    #[arg(long)]
    pub lab: bool,

    #[arg(long)]
    pub activity: bool,

    /// Show every course variant
    #[arg(long)]
    pub all: bool,

    /// Courses per section, 0 to 10
    #[arg(long, default_value_t = 5)]
    pub limit: u32,

    /// Exit with an error if the catalog has issues
    #[arg(long)]
    pub strict: bool,
}

impl ReportArgs {
    pub fn filters(&self) -> Result<DisplayFilters> {
        let limit = CourseLimit::new(self.limit)?;

        if self.all {
            return Ok(DisplayFilters::show_all(limit));
        }

        Ok(DisplayFilters {
            show_language: self.language,
            show_honors: self.honors,
            show_lab: self.lab,
            show_activity: self.activity,
            limit,
        })
    }
}

pub async fn report(args: &ReportArgs) -> Result<()> {
    let filters = args.filters()?;
    let catalog = load_catalog(&args.source)
        .await
        .with_context(|| format!("Failed to load catalog from {}", args.source))?;

    info!("Loaded {} catalog", catalog.year);

    let issues = validate(&catalog);
    for issue in &issues {
        println!("warning: {issue}");
    }

    if args.strict && !issues.is_empty() {
        bail!("{} catalog issue(s) found", issues.len());
    }

    let top_courses = filter(&rank(&catalog), &filters);
    print!(
        "{}",
        Report {
            year: catalog.year,
            top_courses: &top_courses,
        }
    );

    Ok(())
}
