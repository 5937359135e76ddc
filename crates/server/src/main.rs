//! Betting Pool Server Binary
//!
//! Runs the HTTP server for the gender reveal betting pool.

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stork_core::log();
    stork_core::sigint();
    let args = stork_server::Args::parse();
    stork_server::run(args).await?;
    Ok(())
}
