//! Init command implementation

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

use crate::client::models::TeamRole;
use crate::client::{PlatformClient, TeamApi};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Authentication itself lives with the platform's auth provider; init only
/// records the issued token and the user identity it belongs to.
pub async fn run(api_host: Option<&str>, config_path: Option<&str>) -> Result<()> {
    println!("{}", "Welcome to teamctl!".bold().green());
    println!("Let's set up your team platform configuration.\n");

    let user_id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Your platform user ID")
        .interact_text()?;

    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Your display name")
        .interact_text()?;

    let is_head = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you currently the head of a team?")
        .default(false)
        .interact()?;

    let api_token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your platform API token")
        .interact()?;

    let config = Config {
        user_id: Some(user_id.clone()),
        username: Some(username),
        role: if is_head {
            TeamRole::Head
        } else {
            TeamRole::Member
        },
        api_token: Some(api_token.clone()),
        api_host: api_host.map(str::to_string),
    };

    // Best-effort verification; a misconfigured host shouldn't lose the
    // setup the user just typed in.
    println!("\n{}", "Checking your team memberships...".cyan());
    let client = PlatformClient::with_host(Some(api_token), api_host.map(str::to_string))?;
    match client.teams_joined(&user_id).await {
        Ok(count) => println!(
            "{} You currently belong to {} team(s).",
            "✓".green(),
            count
        ),
        Err(err) => println!(
            "{} Could not reach the platform ({}). Saving configuration anyway.",
            "⚠".yellow(),
            err
        ),
    }

    config.save_at(config_path)?;
    println!("\n{}", "Configuration saved. You're all set!".bold().green());
    Ok(())
}
