//! XDG-style path utilities for configuration and state.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "chatloop";

/// Returns the configuration directory for chatloop.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/chatloop` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/chatloop` otherwise
pub fn config_dir() -> Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the state directory for chatloop.
///
/// The session identifier lives here, since it must survive restarts
/// but is not something the user edits.
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/chatloop` if `XDG_STATE_HOME` is set
/// 2. `~/.local/state/chatloop` otherwise
pub fn state_dir() -> Result<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
}

fn xdg_dir(var: &str, home_fallback: &[&str]) -> Result<PathBuf> {
    match std::env::var(var) {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => {
            let mut dir = home_dir()?;
            dir.extend(home_fallback);
            Ok(dir.join(APP_DIR))
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_var<F: FnOnce()>(name: &str, value: Option<&str>, f: F) {
        let original = std::env::var(name).ok();
        match value {
            Some(v) => unsafe { std::env::set_var(name, v) },
            None => unsafe { std::env::remove_var(name) },
        }

        f();

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var(name, val) };
        } else {
            unsafe { std::env::remove_var(name) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_var("XDG_CONFIG_HOME", None, || {
            let dir = config_dir().unwrap();
            assert!(dir.ends_with(".config/chatloop"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_var("XDG_CONFIG_HOME", Some("/custom/config"), || {
            let dir = config_dir().unwrap();
            assert_eq!(dir, PathBuf::from("/custom/config/chatloop"));
        });
    }

    #[test]
    #[serial]
    fn test_state_dir_default() {
        with_var("XDG_STATE_HOME", None, || {
            let dir = state_dir().unwrap();
            assert!(dir.ends_with(".local/state/chatloop"));
        });
    }

    #[test]
    #[serial]
    fn test_state_dir_xdg_override() {
        with_var("XDG_STATE_HOME", Some("/custom/state"), || {
            let dir = state_dir().unwrap();
            assert_eq!(dir, PathBuf::from("/custom/state/chatloop"));
        });
    }

    #[test]
    #[serial]
    fn test_empty_xdg_var_falls_back_to_home() {
        with_var("XDG_STATE_HOME", Some(""), || {
            let dir = state_dir().unwrap();
            assert!(dir.ends_with(".local/state/chatloop"));
        });
    }
}
