use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dioxus::logger::tracing::info;

/// Write the landing page out as a standalone `index.html` plus its assets.
#[derive(Debug, Parser)]
#[command(name = "portfolio-export", version)]
struct Args {
    /// Directory the page is written into. Created if missing.
    #[arg(long, default_value = "docs")]
    out_dir: PathBuf,

    /// Directory copied to `<out-dir>/assets`.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Document title.
    #[arg(long, default_value = "Ravi Verma")]
    title: String,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let report = portfolio::export::export_site(&args.out_dir, &args.assets, &args.title)?;

    info!(
        path = %report.index.display(),
        bytes = report.index_bytes,
        assets = report.assets_copied,
        "static site written"
    );
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
