use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chatloop")]
#[command(about = "Terminal chat client with session-scoped feedback")]
#[command(version)]
pub struct Args {
    /// Chat backend base URL
    #[arg(short = 'e', long, env = "CHATLOOP_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat (the default)
    Chat,
    /// Check that the backend is reachable
    Ping,
    /// Inspect the stored session identifier
    Session {
        #[command(subcommand)]
        command: Option<SessionCommand>,
    },
    /// Configure chatloop settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Print the session identifier, creating one if needed
    Show,
}
