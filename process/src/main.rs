use clap::Parser;
use process::ReportArgs;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = ReportArgs::parse();

    process::report(&args).await
}
