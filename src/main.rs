//! teamctl - CLI companion for the team platform

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod workflow;

use cli::{
    Cli, CommandContext, Commands, InvitationCommands, MemberCommands, NotificationCommands,
    TeamCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "Error:".red(), err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        format,
        config,
        api_host,
        debug: _,
    } = cli;
    let context = || CommandContext::new(format, api_host.as_deref(), config.as_deref());
    match command {
        Commands::Init => cli::init::run(api_host.as_deref(), config.as_deref()).await,
        Commands::Status => {
            cli::status::run(api_host.as_deref(), config.as_deref()).await
        }
        Commands::Team(team_cmd) => {
            let ctx = context()?;
            match team_cmd {
                TeamCommands::Create {
                    name,
                    description,
                    members,
                } => cli::team::create(&ctx, name, description, members).await,
            }
        }
        Commands::Member(member_cmd) => {
            let ctx = context()?;
            match member_cmd {
                MemberCommands::List => cli::member::list(&ctx).await,
            }
        }
        Commands::Invitation(invitation_cmd) => {
            let ctx = context()?;
            match invitation_cmd {
                InvitationCommands::List => cli::invitation::list(&ctx).await,
                InvitationCommands::Accept { invitation_id } => {
                    cli::invitation::accept(&ctx, &invitation_id).await
                }
                InvitationCommands::Reject { invitation_id, yes } => {
                    cli::invitation::reject(&ctx, &invitation_id, yes).await
                }
            }
        }
        Commands::Notification(notification_cmd) => {
            let ctx = context()?;
            match notification_cmd {
                NotificationCommands::List => cli::notification::list(&ctx).await,
                NotificationCommands::Read { notification_id } => {
                    cli::notification::read(&ctx, &notification_id).await
                }
            }
        }
    }
}
