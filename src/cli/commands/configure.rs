//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::Text;
use std::path::PathBuf;

use crate::config::{
    ChatloopConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, ResolveOptions, resolve_config,
};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the stored settings. Otherwise asks for the endpoint
/// and session file interactively and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        print_current_settings(&manager, &manager.load_or_default()?);
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&manager, &config);

    let endpoint = prompt_endpoint(config.chatloop.endpoint.as_deref())?;
    let session_file = prompt_session_file(config.chatloop.session_file.as_ref())?;

    config.chatloop = ChatloopConfig {
        endpoint: Some(endpoint),
        session_file,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_settings(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}       {}",
        Style::label("endpoint"),
        config.chatloop.endpoint.as_deref().map_or_else(
            || Style::secondary(format!("{DEFAULT_ENDPOINT} (default)")),
            Style::value
        )
    );
    println!(
        "  {}   {}",
        Style::label("session file"),
        config.chatloop.session_file.as_ref().map_or_else(
            || Style::secondary("(default)"),
            |p| Style::value(p.display())
        )
    );
    println!(
        "  {}    {}",
        Style::label("config file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Chat backend URL:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .prompt()?;
    let endpoint = endpoint.trim().to_string();

    // Same validation as startup.
    resolve_config(
        &ResolveOptions {
            endpoint: Some(endpoint.clone()),
        },
        &ConfigFile::default(),
    )?;

    Ok(endpoint)
}

fn prompt_session_file(current: Option<&PathBuf>) -> Result<Option<PathBuf>> {
    let current = current.map(|p| p.display().to_string()).unwrap_or_default();
    let answer = Text::new("Session file:")
        .with_initial_value(&current)
        .with_help_message("Leave empty to use the default state directory")
        .prompt()?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }

    let path = PathBuf::from(answer);
    if path.is_dir() {
        bail!("Session file cannot be a directory: {answer}");
    }
    Ok(Some(path))
}
