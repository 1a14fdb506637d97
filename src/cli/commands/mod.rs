//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::session::FileSessionStore;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Backend health check.
pub mod ping;

/// Session inspection command handler.
pub mod session;

fn load_config(endpoint: Option<String>) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(&ResolveOptions { endpoint }, &file_config)
}

fn open_session_store(config: &ResolvedConfig) -> Result<FileSessionStore> {
    match &config.session_file {
        Some(path) => Ok(FileSessionStore::at(path.clone())),
        None => FileSessionStore::new(),
    }
}
