use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::api::{ChatBackend, Reward};
use crate::controller::{ChatController, FeedbackOutcome, FeedbackPrompt};
use crate::ui::{Spinner, is_prompt_cancelled};

/// What the REPL shows under `/config`.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// The backend base URL.
    pub endpoint: String,
    /// Where the session identifier is stored.
    pub session_file: PathBuf,
}

/// An interactive chat session in the terminal.
///
/// Reads one line at a time and does not prompt again until the previous
/// request has resolved.
pub struct Repl<B> {
    config: ReplConfig,
    controller: ChatController<B>,
    /// Number of transcript entries already printed.
    rendered: usize,
}

impl<B: ChatBackend> Repl<B> {
    pub const fn new(config: ReplConfig, controller: ChatController<B>) -> Self {
        Self {
            config,
            controller,
            rendered: 0,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(help_message(self.controller.prompt()))
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.send(text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn send(&mut self, mut line: String) {
        let Some(pending) = self.controller.stage_message(&mut line) else {
            return;
        };
        self.render_transcript();

        {
            let _spinner = Spinner::new("Thinking...");
            self.controller.send_message(pending).await;
        }
        self.render();
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Good => self.feedback(Reward::Positive).await,
            SlashCommand::Bad => self.feedback(Reward::Negative).await,
            SlashCommand::Clear => {
                {
                    let _spinner = Spinner::new("Clearing...");
                    self.controller.clear_history().await;
                }
                self.render();
            }
            SlashCommand::Config => ui::print_config(&self.config, self.controller.session()),
            SlashCommand::Explain => ui::print_explanation(self.controller.last_explanation()),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Session => ui::print_session(self.controller.session()),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    async fn feedback(&mut self, reward: Reward) {
        if self.controller.submit_feedback(reward).await == FeedbackOutcome::NotOffered {
            ui::print_error("No feedback was requested for the last reply");
            return;
        }
        self.render();
    }

    /// Prints transcript entries appended since the last render, then the
    /// feedback prompt state.
    fn render(&mut self) {
        self.render_transcript();
        ui::print_prompt(self.controller.prompt());
    }

    fn render_transcript(&mut self) {
        let transcript = self.controller.transcript();
        for message in transcript.since(self.rendered) {
            ui::print_message(message);
        }
        self.rendered = transcript.len();
    }
}

const fn help_message(prompt: FeedbackPrompt) -> &'static str {
    match prompt {
        FeedbackPrompt::Shown => "Rate the reply with /good or /bad, or keep chatting",
        FeedbackPrompt::Hidden => "Type a message, /help for commands, Ctrl+C to quit",
    }
}
