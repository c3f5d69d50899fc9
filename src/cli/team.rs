//! Team management commands

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};

use crate::cli::CommandContext;
use crate::client::TeamApi;
use crate::error::Result;
use crate::output::spinner;

/// Run `team create`.
///
/// Name and description come from flags or interactive prompts; the member
/// selection comes from repeated `--member` flags or an interactive picker
/// over the members currently open to joining.
pub async fn create(
    ctx: &CommandContext,
    name: Option<String>,
    description: Option<String>,
    members: Vec<String>,
) -> Result<()> {
    let mut session = ctx.start_session().await?;
    let mut flow = crate::workflow::TeamCreationFlow::new();

    flow.draft_mut().name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Team name")
            .interact_text()?,
    };
    flow.draft_mut().description = match description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Team description")
            .interact_text()?,
    };

    if members.is_empty() {
        pick_members_interactively(ctx, &mut flow).await?;
    } else {
        for member_id in &members {
            flow.selection_mut().toggle(member_id);
        }
    }

    let pb = spinner("Creating team...");
    let result = flow.submit(&ctx.client, &mut session).await;
    pb.finish_and_clear();

    let team = result?;
    println!(
        "{} Team {} created successfully.",
        "✓".green(),
        team.name.bold()
    );
    println!(
        "Teams joined: {}/{}",
        session.capacity.teams_joined(),
        crate::session::MAX_TEAMS
    );
    Ok(())
}

/// Offer the members open to work as a multi-select picker.
async fn pick_members_interactively(
    ctx: &CommandContext,
    flow: &mut crate::workflow::TeamCreationFlow,
) -> Result<()> {
    let pb = spinner("Fetching available members...");
    let available = ctx.client.list_available_members().await;
    pb.finish_and_clear();
    let available = available?;

    if available.is_empty() {
        println!(
            "{}",
            "No members are currently open to joining a team.".yellow()
        );
        return Ok(());
    }

    let labels: Vec<String> = available
        .iter()
        .map(|m| format!("{} <{}>", m.username, m.email))
        .collect();
    let picked = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select members to invite")
        .items(&labels)
        .interact()?;

    for index in picked {
        flow.selection_mut().toggle(&available[index].id);
    }
    Ok(())
}
