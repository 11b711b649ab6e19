use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "kapwatch")]
#[command(about = "Daily disclosure report for a KAP index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect the window's disclosures and email the HTML report.
    Report {
        /// Drive the platform's web UI through WebDriver instead of the JSON API.
        #[arg(long)]
        via_browser: bool,
        /// Window start, YYYY-MM-DD (default: previous business day).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Window end, YYYY-MM-DD (default: most recent business day).
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Print the rendered HTML to stdout instead of sending mail.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report {
            via_browser,
            from,
            to,
            dry_run,
        } => run::report(via_browser, from, to, dry_run).await,
    }
}
