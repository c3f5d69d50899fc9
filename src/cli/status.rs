//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::session::MAX_TEAMS;

/// Run the status command
pub async fn run(api_host: Option<&str>, config_path: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(OutputFormat::Table, api_host, config_path)?;
    let session = ctx.start_session().await?;

    let path = match config_path {
        Some(p) => p.to_string(),
        None => Config::default_path()?.display().to_string(),
    };

    println!("{}", "teamctl status".bold());
    println!("Config file: {}", path);
    println!(
        "Signed in as: {} ({})",
        session.user.name.bold(),
        session.user.id
    );
    println!(
        "Teams joined: {}/{}",
        session.capacity.teams_joined(),
        MAX_TEAMS
    );

    if session.capacity.can_join_more_teams() {
        println!("{}", "You can join or create more teams.".green());
    } else {
        println!(
            "{}",
            "You have reached the team limit. Leave a team to join another.".yellow()
        );
    }

    Ok(())
}
