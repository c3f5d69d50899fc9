//! Invitation commands

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::CommandContext;
use crate::client::models::Invitation;
use crate::error::{ApiError, Result};
use crate::models::display::InvitationDisplay;
use crate::output::{render, spinner};
use crate::workflow::InvitationWorkflow;

/// Run `invitation list`.
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let user = ctx.session_user()?;
    let workflow = InvitationWorkflow::new();

    let pb = spinner("Loading invitations...");
    let invitations = workflow.list_pending(&ctx.client, &user.id).await;
    pb.finish_and_clear();
    let invitations = invitations?;

    if invitations.is_empty() {
        println!("{}", "No pending invitations".yellow());
        return Ok(());
    }

    let rows: Vec<InvitationDisplay> = invitations.iter().map(InvitationDisplay::from).collect();
    println!("{}", render(ctx.format, &rows)?);
    Ok(())
}

/// Run `invitation accept`.
pub async fn accept(ctx: &CommandContext, invitation_id: &str) -> Result<()> {
    let mut session = ctx.start_session().await?;
    let mut workflow = InvitationWorkflow::new();

    let invitation = find_invitation(ctx, &workflow, &session.user.id, invitation_id).await?;

    let pb = spinner("Accepting invitation...");
    let result = workflow
        .accept(
            &ctx.client,
            &mut session.capacity,
            &invitation,
            session.user.role,
        )
        .await;
    pb.finish_and_clear();
    result?;

    println!("{} Invitation accepted.", "✓".green());
    println!("{} You were added to the team roster.", "✓".green());
    println!(
        "Teams joined: {}/{}",
        session.capacity.teams_joined(),
        crate::session::MAX_TEAMS
    );
    Ok(())
}

/// Run `invitation reject`.
pub async fn reject(ctx: &CommandContext, invitation_id: &str, yes: bool) -> Result<()> {
    let session = ctx.start_session().await?;
    let mut workflow = InvitationWorkflow::new();

    let invitation = find_invitation(ctx, &workflow, &session.user.id, invitation_id).await?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Reject invitation \"{}\"?", invitation.text))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let pb = spinner("Rejecting invitation...");
    let result = workflow
        .reject(&ctx.client, &session.capacity, &invitation)
        .await;
    pb.finish_and_clear();
    result?;

    println!("{} Invitation rejected.", "✓".green());
    Ok(())
}

/// Resolve an invitation ID against the user's pending list.
async fn find_invitation(
    ctx: &CommandContext,
    workflow: &InvitationWorkflow,
    user_id: &str,
    invitation_id: &str,
) -> Result<Invitation> {
    let pb = spinner("Loading invitations...");
    let invitations = workflow.list_pending(&ctx.client, user_id).await;
    pb.finish_and_clear();

    invitations?
        .into_iter()
        .find(|inv| inv.id == invitation_id)
        .ok_or_else(|| ApiError::NotFound(format!("Pending invitation {}", invitation_id)).into())
}
