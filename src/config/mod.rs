mod manager;

pub use manager::{
    ChatloopConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions, ResolvedConfig,
    resolve_config,
};
