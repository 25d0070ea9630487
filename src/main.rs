//! Pairwise Preset Comparison
//!
//! Builds the transparency sweep, asks the configured oracle to choose
//! between every pair of presets and prints the winners.

use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tracing::info;

use preset_duel::config::{DuelConfig, OracleMode};
use preset_duel::driver::{build_presets, ComparisonDriver};
use preset_duel::oracle::{ChoiceOracle, RemoteOracle, TerminalOracle};
use preset_duel::utils::init_logging;

// ──────────────────────────────────────────────────────────────────────────────
// ORACLE SELECTION
// ──────────────────────────────────────────────────────────────────────────────

fn connect_oracle(config: &DuelConfig) -> Result<Arc<dyn ChoiceOracle>> {
    let oracle: Arc<dyn ChoiceOracle> = match config.oracle.mode {
        OracleMode::Remote => {
            let remote = RemoteOracle::from_config(&config.oracle)
                .context("Failed to configure remote oracle")?;
            info!("Using comparison service at {}", remote.base_url());
            Arc::new(remote)
        }
        OracleMode::Terminal => Arc::new(TerminalOracle::new()),
    };
    Ok(oracle)
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_logging().map_err(|e| anyhow!(e)).context("Failed to initialize logging")?;

    let config = DuelConfig::from_env().context("Invalid configuration")?;

    // Presets are validated before the oracle is contacted
    let presets = build_presets(config.preset_count, &config.sweep)
        .context("Failed to build preset sweep")?;

    let oracle = connect_oracle(&config)?;

    let mut driver = ComparisonDriver::new(oracle, presets);
    driver.run().await.context("Comparison run aborted")?;

    Ok(())
}
