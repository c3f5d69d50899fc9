//! Notification commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::client::NotificationApi;
use crate::error::Result;
use crate::models::display::NotificationDisplay;
use crate::output::{render, spinner};
use crate::workflow::NotificationFeed;

/// Run `notification list`.
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let feed = load_feed(ctx).await?;

    if feed.is_empty() {
        println!("{}", "No notifications".yellow());
        return Ok(());
    }

    // Newest first for display; feed state itself stays in arrival order.
    let mut rows: Vec<(&_, NotificationDisplay)> = feed
        .entries()
        .iter()
        .map(|n| (n, NotificationDisplay::from(n)))
        .collect();
    rows.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at));
    let rows: Vec<NotificationDisplay> = rows.into_iter().map(|(_, row)| row).collect();

    println!("{}", render(ctx.format, &rows)?);

    print_unread_indicator(&feed);
    Ok(())
}

/// Run `notification read`.
pub async fn read(ctx: &CommandContext, notification_id: &str) -> Result<()> {
    let mut feed = load_feed(ctx).await?;

    let pb = spinner("Marking notification as read...");
    let result = feed.mark_read(&ctx.client, notification_id).await;
    pb.finish_and_clear();

    if result? {
        println!("{} Notification marked as read.", "✓".green());
    } else {
        println!("Notification was already read.");
    }

    print_unread_indicator(&feed);
    Ok(())
}

async fn load_feed(ctx: &CommandContext) -> Result<NotificationFeed> {
    let user = ctx.session_user()?;

    let pb = spinner("Loading notifications...");
    let batches = ctx.client.list_notifications(&user.id).await;
    pb.finish_and_clear();

    Ok(NotificationFeed::from_batches(batches?))
}

fn print_unread_indicator(feed: &NotificationFeed) {
    if feed.has_unread() {
        println!(
            "{} {} unread notification(s)",
            "●".yellow(),
            feed.unread_count()
        );
    } else {
        println!("{}", "All notifications read.".green());
    }
}
