//! noteseek - keyboard-notation lookup service
//!
//! One endpoint: POST /api/notes with `{"search_query": "..."}` searches
//! noobnotes.net, follows the first "Continue reading" link, and returns the
//! article's notation lines.

use anyhow::Result;
use clap::Parser;

use noteseek_server::{build_router, AppState};

#[derive(Parser)]
#[command(name = "noteseek")]
#[command(about = "HTTP service that extracts keyboard notation from noobnotes.net")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: String,

    /// Base URL of the notation site
    #[arg(long, env = "NOTESEEK_BASE_URL", default_value = "https://noobnotes.net")]
    base_url: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long)]
    utc: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    tracing::info!(
        "Starting noteseek v{} [{}]",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_HASH")
    );

    let client = noteseek_scrape::http_client()?;
    let state = AppState::new(client, cli.base_url);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!(addr = %cli.bind, "noteseek listening");

    axum::serve(listener, app).await?;

    Ok(())
}
