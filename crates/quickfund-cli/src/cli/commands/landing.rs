//! Interactive landing page command.

use anyhow::Result;
use quickfund_core::config::{Config, paths};

pub async fn run(config: Config) -> Result<()> {
    tracing::debug!(
        config_path = %paths::config_path().display(),
        "launching landing page"
    );
    quickfund_tui::run_landing(config).await
}
