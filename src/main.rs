use anyhow::Result;
use clap::Parser;

use chatloop_cli::api::ApiError;
use chatloop_cli::cli::commands::{chat, configure, ping, session};
use chatloop_cli::cli::{Args, Command, SessionCommand};
use chatloop_cli::output::{self, OutputConfig};
use chatloop_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
        verbosity: args.verbose,
    });

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exit_code(&e));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(chat::ChatOptions {
                endpoint: args.endpoint,
            })
            .await?;
        }
        Some(Command::Ping) => {
            ping::run_ping(args.endpoint).await?;
        }
        Some(Command::Session {
            command: None | Some(SessionCommand::Show),
        }) => {
            session::show_session(args.endpoint)?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ApiError>().is_some() {
        exitcode::UNAVAILABLE
    } else {
        exitcode::SOFTWARE
    }
}
