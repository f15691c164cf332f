//! Full-screen terminal landing page for QuickFund.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod style;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{auth, contact, landing, navbar, testimonials, toast};
use quickfund_core::auth::AuthClient;
use quickfund_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive landing page until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the auth backend is
/// misconfigured, or the terminal fails.
pub async fn run_landing(config: Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The landing page requires a terminal.\n\
             Use `quickfund validate` or `quickfund translate` for non-interactive use."
        );
    }

    let client = AuthClient::from_config(&config.auth)?;

    let mut err = stderr();
    writeln!(err, "QuickFund")?;
    writeln!(err, "Auth backend: {}", client.backend_name())?;
    err.flush()?;

    tracing::info!(
        language = config.language.code(),
        theme = ?config.theme,
        backend = client.backend_name(),
        "starting landing page"
    );

    let mut runtime = TuiRuntime::new(config, client)?;
    runtime.run()?;

    tracing::info!("landing page closed");
    Ok(())
}
