use clap::{Parser, Subcommand};
use footfall_dashboard::client::DEFAULT_BASE_URL;
use footfall_dashboard::{
    load_selection, CalendarPosition, Dashboard, FootfallClient, FootfallQuery, RecordedView,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "footfall_dashboard", about = "Drive the footfall dashboard from a terminal")]
struct Cli {
    /// Backend origin.
    #[arg(long, env = "FOOTFALL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Move the calendar by a number of months.
    Month {
        #[arg(long, requires = "month", conflicts_with = "heading")]
        year: Option<i32>,
        #[arg(long, requires = "year")]
        month: Option<u32>,
        /// Page heading such as `2024年1月`.
        #[arg(long)]
        heading: Option<String>,
        #[arg(long, allow_hyphen_values = true, default_value_t = 1)]
        offset: i32,
    },
    /// Load one day's chart and summary.
    Day { year: i32, month: u32, day: u32 },
    /// Upload a video for analysis.
    Upload { path: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let client = FootfallClient::new(&cli.base_url)?;
    info!(base_url = %client.base_url(), "using backend");

    let view = RecordedView::new();
    let dashboard = Dashboard::new(client, Arc::new(view.clone()));

    let result = match cli.command {
        Command::Month {
            year,
            month,
            heading,
            offset,
        } => {
            let target = match (heading, year, month) {
                (Some(heading), _, _) => dashboard
                    .navigator
                    .change_month_from_heading(&heading, offset)?,
                (None, Some(year), Some(month)) => dashboard
                    .navigator
                    .change_month(CalendarPosition::new(year, month)?, offset),
                _ => dashboard
                    .navigator
                    .change_month(CalendarPosition::today(), offset),
            };
            info!(%target, "calendar moved");
            if let Some(location) = view.snapshot().navigations.last() {
                println!("{}", dashboard_location(&cli.base_url, location));
            }
            return Ok(());
        }
        Command::Day { year, month, day } => {
            let query = FootfallQuery::new(year, month, day)?;
            dashboard.viewer.show_footfall(query).await.map(|_| ())
        }
        Command::Upload { path } => {
            if let Some(path) = path {
                view.select(Some(load_selection(&path).await?));
            }
            dashboard.uploader.upload().await.map(|_| ())
        }
    };

    println!("{}", serde_json::to_string_pretty(&view.snapshot())?);
    for notice in view.snapshot().notices {
        eprintln!("{notice}");
    }
    result?;

    Ok(())
}

fn dashboard_location(base_url: &str, location: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), location)
}
