use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use url::Url;

use crate::paths;

/// Backend used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8005";

/// Settings in the `[chatloop]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatloopConfig {
    /// Base URL of the chat backend.
    pub endpoint: Option<String>,
    /// Where the session identifier is kept, if not the default state file.
    pub session_file: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/chatloop/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chatloop: ChatloopConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The backend base URL.
    pub endpoint: String,
    /// Explicit session file, or `None` for the default location.
    pub session_file: Option<PathBuf>,
}

/// CLI overrides that take precedence over config file values.
///
/// `endpoint` already includes the `CHATLOOP_ENDPOINT` environment variable,
/// which clap reads when the flag is absent.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
}

/// Merges CLI options with config file settings.
///
/// Priority: CLI flag (or its env var), then the config file, then
/// [`DEFAULT_ENDPOINT`].
///
/// # Errors
///
/// Returns an error if the endpoint is not an http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.chatloop.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str);

    validate_endpoint(endpoint)?;

    Ok(ResolvedConfig {
        endpoint: endpoint.to_string(),
        session_file: config_file.chatloop.session_file.clone(),
    })
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint).with_context(|| {
        format!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Expected something like {DEFAULT_ENDPOINT}"
        )
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid endpoint URL: '{endpoint}'\n\n\
             Only http and https endpoints are supported"
        );
    }

    Ok(())
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/chatloop/config.toml`
    /// or `~/.config/chatloop/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        self.parse(&contents)
    }

    fn parse(&self, contents: &str) -> Result<ConfigFile> {
        toml::from_str(contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, or the defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::read_to_string(&self.config_path) {
            Ok(contents) => self.parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
                Ok(ConfigFile::default())
            }
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read config file: {}", self.config_path.display())
            }),
        }
    }
}
