//! Chat mode UI components.

use crate::controller::{ChatMessage, FeedbackPrompt};
use crate::session::SessionId;
use crate::ui::Style;

use super::repl::ReplConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &ReplConfig) {
    println!(
        "{} {} - connected to {}",
        Style::header("chatloop"),
        Style::version(format!("v{VERSION}")),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_message(message: &ChatMessage) {
    println!("{} {}", Style::sender(message.sender()), message.text());
}

/// Shows the feedback choices while the prompt is up.
pub fn print_prompt(prompt: FeedbackPrompt) {
    if prompt.is_shown() {
        println!(
            "{} {} {} {}",
            Style::hint("Was this helpful?"),
            Style::command("/good"),
            Style::hint("or"),
            Style::command("/bad")
        );
    }
    println!();
}

pub fn print_config(config: &ReplConfig, session: &SessionId) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}        {}",
        Style::label("session"),
        Style::value(session)
    );
    println!(
        "  {}   {}",
        Style::label("session file"),
        Style::secondary(config.session_file.display())
    );
    println!();
}

pub fn print_session(session: &SessionId) {
    println!("{}", Style::value(session));
    println!();
}

pub fn print_explanation(explanation: Option<&serde_json::Value>) {
    match explanation {
        Some(serde_json::Value::String(text)) => println!("{text}"),
        Some(value) => match serde_json::to_string_pretty(value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{value}"),
        },
        None => println!("{}", Style::secondary("No explanation for the last reply.")),
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/good", "Rate the last reply as helpful"),
        ("/bad", "Rate the last reply as unhelpful"),
        ("/explain", "Show the explanation for the last reply"),
        ("/clear", "Ask the server to forget this conversation"),
        ("/session", "Show the session identifier"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in rows {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<9}")),
            Style::secondary(description)
        );
    }
    println!();
    println!(
        "{}",
        Style::hint("Start a message with // to send text beginning with /")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
