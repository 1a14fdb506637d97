use anyhow::{Context, Result};

use super::load_config;
use crate::api::{ChatBackend, HttpBackend};
use crate::ui::Style;

/// Calls the backend's root endpoint and prints its message.
pub async fn run_ping(endpoint: Option<String>) -> Result<()> {
    let config = load_config(endpoint)?;
    let backend = HttpBackend::new(&config.endpoint)?;

    crate::status!("Pinging {}", Style::secondary(backend.base_url()));
    let message = backend
        .health()
        .await
        .with_context(|| format!("Backend at {} is not reachable", config.endpoint))?;

    println!("{} {message}", Style::success("✓"));
    Ok(())
}
