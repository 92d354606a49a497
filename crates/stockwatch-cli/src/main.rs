use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockwatch_kmart::KmartClient;

mod run;

#[derive(Debug, Parser)]
#[command(name = "stockwatch")]
#[command(about = "Kmart AU stock availability checker")]
struct Cli {
    /// Path to the SKU watchlist, one keycode per line
    /// (defaults to STOCKWATCH_SKUS_PATH, then ./skus.txt).
    #[arg(long)]
    skus: Option<PathBuf>,

    /// Postcode to check availability for; prompted on stdin when omitted.
    #[arg(long)]
    postcode: Option<String>,

    /// Pause between consecutive SKU queries, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = stockwatch_core::load_app_config_from_env()
        .context("failed to load configuration from environment")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let postcode = match cli.postcode {
        Some(p) => p.trim().to_owned(),
        None => prompt_postcode().context("failed to read postcode from stdin")?,
    };

    let skus_path = cli.skus.unwrap_or_else(|| config.skus_path.clone());
    let skus = match stockwatch_core::load_skus(&skus_path) {
        Ok(skus) => skus,
        Err(e) => {
            // The one fatal error: no watchlist means nothing to query.
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.inter_request_delay_ms));
    let client = KmartClient::new(&config).context("failed to build availability client")?;

    println!("\nTracking {} SKUs for postcode {postcode}...\n", skus.len());

    let stdout = std::io::stdout();
    let summary = run::run_checks(&client, &skus, &postcode, delay, &mut stdout.lock())
        .await
        .context("failed writing report to stdout")?;

    tracing::info!(
        checked = summary.checked,
        succeeded = summary.succeeded,
        network_errors = summary.network_errors,
        unexpected_errors = summary.unexpected_errors,
        "run complete"
    );

    Ok(())
}

/// Reads one line from stdin as the postcode. Any string is accepted, even an
/// empty one — the gateway itself decides what a postcode means.
fn prompt_postcode() -> std::io::Result<String> {
    print!("Enter postcode: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
