// File: crates/gascost/src/main.rs
// Summary: CLI entry: `gascost [CONFIG.toml]` renders the gas-cost chart described by the config.

use anyhow::{Context, Result};
use gascost::{ChartRenderer, RenderConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => RenderConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => RenderConfig::load_default().context("failed to load gascost.toml")?,
    };

    let report = ChartRenderer::new(config).run()?;
    println!("Wrote {} ({} bytes)", report.output.display(), report.bytes);
    if let Some(table) = &report.table {
        println!("Wrote {}", table.display());
    }
    Ok(())
}
