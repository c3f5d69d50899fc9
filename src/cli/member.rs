//! Member listing command

use colored::Colorize;

use crate::cli::CommandContext;
use crate::client::TeamApi;
use crate::error::Result;
use crate::models::display::MemberDisplay;
use crate::output::{render, spinner};

/// Run `member list`.
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let pb = spinner("Fetching available members...");
    let members = ctx.client.list_available_members().await;
    pb.finish_and_clear();
    let members = members?;

    if members.is_empty() {
        println!(
            "{}",
            "No members are currently open to joining a team.".yellow()
        );
        return Ok(());
    }

    let rows: Vec<MemberDisplay> = members.iter().map(MemberDisplay::from).collect();
    println!("{}", render(ctx.format, &rows)?);
    Ok(())
}
