//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};

pub mod context;
pub mod init;
pub mod invitation;
pub mod member;
pub mod notification;
pub mod status;
pub mod team;

pub use context::CommandContext;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// teamctl - CLI companion for the team platform
#[derive(Parser, Debug)]
#[command(name = "teamctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "TEAMCTL_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "TEAMCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the platform API host
    #[arg(long, global = true, env = "TEAMCTL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TEAMCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up your platform credentials and identity
    Init,

    /// Show the signed-in user and team capacity
    Status,

    /// Team operations
    #[command(subcommand)]
    Team(TeamCommands),

    /// Members open to joining a team
    #[command(subcommand)]
    Member(MemberCommands),

    /// Pending invitations
    #[command(subcommand)]
    Invitation(InvitationCommands),

    /// Notifications
    #[command(subcommand)]
    Notification(NotificationCommands),
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// Create a new team headed by the signed-in user
    Create {
        /// Team name (prompted for if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Team description (prompted for if omitted)
        #[arg(long)]
        description: Option<String>,

        /// Member to invite onto the team; repeat for several
        #[arg(long = "member", value_name = "USER_ID")]
        members: Vec<String>,
    },
}

/// Member subcommands
#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List members open to joining a team
    List,
}

/// Invitation subcommands
#[derive(Subcommand, Debug)]
pub enum InvitationCommands {
    /// List your pending invitations
    List,

    /// Accept an invitation and join the team
    Accept {
        /// ID of the invitation to accept
        invitation_id: String,
    },

    /// Reject an invitation
    Reject {
        /// ID of the invitation to reject
        invitation_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Notification subcommands
#[derive(Subcommand, Debug)]
pub enum NotificationCommands {
    /// List your notifications
    List,

    /// Mark a notification as read
    Read {
        /// ID of the notification to mark as read
        notification_id: String,
    },
}
