//! mdvis - payload inspection entry point
//!
//! Runs the classification and reduction pipeline against a payload
//! file and prints the resulting chart data as JSON. Useful for
//! checking what the portal will render for a deposited analysis
//! without starting the web stack.
//!
//! Usage: `mdvis <payload.json> <analysis-name> [reduction.toml]`

use anyhow::{bail, Context};
use mdvis_core::{render, ReductionConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mdvis_core=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (payload_path, name, config_path) = match args.as_slice() {
        [payload, name] => (payload, name, None),
        [payload, name, config] => (payload, name, Some(config)),
        _ => bail!("usage: mdvis <payload.json> <analysis-name> [reduction.toml]"),
    };

    let config = match config_path {
        Some(path) => ReductionConfig::load(path)
            .with_context(|| format!("Failed to load reduction config from {}", path))?,
        None => ReductionConfig::default(),
    };

    let text = std::fs::read_to_string(payload_path)
        .with_context(|| format!("Failed to read payload from {}", payload_path))?;
    let payload: serde_json::Value =
        serde_json::from_str(&text).context("Payload is not valid JSON")?;

    tracing::info!(analysis = name, payload = payload_path, "rendering analysis");

    match render(name, &payload, &config) {
        Ok(chart) => {
            println!("{}", serde_json::to_string_pretty(&chart)?);
            Ok(())
        }
        Err(e) => {
            // The portal shows a placeholder here; the inspector
            // reports it on stderr and exits non-zero.
            tracing::warn!("{}", e);
            bail!("{}", e)
        }
    }
}
