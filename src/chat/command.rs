use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/bad", "Rate the last reply as unhelpful"),
    ("/clear", "Ask the server to forget this conversation"),
    ("/config", "Show current configuration"),
    ("/explain", "Show the explanation for the last reply"),
    ("/good", "Rate the last reply as helpful"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
    ("/session", "Show the session identifier"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Good,
    Bad,
    Clear,
    Config,
    Explain,
    Help,
    Session,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    // A doubled slash sends the rest, leading slash included, as a message
    if let Some(escaped) = input.strip_prefix("//") {
        return Input::Text(format!("/{escaped}"));
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("good" | "up" | "+1") => Input::Command(SlashCommand::Good),
        Some("bad" | "down" | "-1") => Input::Command(SlashCommand::Bad),
        Some("clear") => Input::Command(SlashCommand::Clear),
        Some("config") => Input::Command(SlashCommand::Config),
        Some("explain" | "why") => Input::Command(SlashCommand::Explain),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("session") => Input::Command(SlashCommand::Session),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
