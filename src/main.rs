use clap::Parser;
use zaia_mcp::cli::{self, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cli::run(args).await
}
