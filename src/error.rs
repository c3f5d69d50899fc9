//! Error types for the teamctl CLI

use thiserror::Error;

/// Result type alias for teamctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Accepting an invitation succeeded on the invitation side but the
    /// roster update failed; the invitation was returned to pending.
    #[error("Failed to update team: {source}. Invitation {invitation_id} was returned to pending.")]
    RosterRolledBack {
        invitation_id: String,
        #[source]
        source: ApiError,
    },

    /// The roster update failed and the compensating revert of the
    /// invitation also failed: the invitation stays accepted without a
    /// matching roster entry until the server reconciles it.
    #[error(
        "Failed to update team: {roster}. Rolling invitation {invitation_id} back also failed: \
         {rollback}. The invitation is accepted but team membership was not recorded."
    )]
    ConsistencyGap {
        invitation_id: String,
        #[source]
        roster: ApiError,
        rollback: ApiError,
    },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `teamctl init` to set up your API token.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Unexpected status {status}: {message}")]
    Unexpected { status: u16, message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the platform API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Policy violations detected locally, before any network call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error(
        "A team head cannot join another team as a member. Either reject the invite or leave \
         your team to join this one."
    )]
    HeadCannotJoin,

    #[error("You can not be in more than {0} teams. Please leave a team to join another.")]
    TeamCapReached(usize),

    #[error("Invitation {0} has already been accepted or rejected")]
    InvitationResolved(String),

    #[error("An update for invitation {0} is already in flight")]
    UpdateInFlight(String),

    #[error("Team name is required")]
    EmptyTeamName,

    #[error("Team description is required")]
    EmptyTeamDescription,

    #[error("You must leave existing teams to become a team head")]
    CannotHeadTeam,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `teamctl init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API token not configured. Run `teamctl init` to set up your token.")]
    MissingToken,

    #[error("User identity not configured. Run `teamctl init` to sign in.")]
    MissingUser,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
