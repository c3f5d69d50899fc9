//! Team platform API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::api::{InvitationApi, NotificationApi, TeamApi};
use super::models::{
    AddMemberRequest, AvailableMember, CreateTeamRequest, Invitation, InvitationStatus,
    NotificationBatches, Team, UpdateInvitationRequest,
};
use crate::error::{ApiError, Result};

/// Default platform host (the Next.js app serving the `/api` routes)
const DEFAULT_API_HOST: &str = "http://localhost:3000";

/// Rate limit: 6 requests per second (360 per minute)
const RATE_LIMIT_PER_SECOND: u32 = 6;

/// Team platform API client
pub struct PlatformClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl PlatformClient {
    /// Create a client against the default platform host.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_host(token, None)
    }

    /// Create a client against a custom host (tests, self-hosted setups).
    pub fn with_host(token: Option<String>, host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: host.unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            token,
            rate_limiter,
        })
    }

    /// Issue a request and map any non-200 response to an [`ApiError`].
    ///
    /// The platform reports failures with an optional `{"message"}` body;
    /// no richer error schema is assumed.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<reqwest::Response> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        let message = error_message(response).await;
        let err = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(message)
            }
            status if status.is_server_error() => ApiError::ServerError(message),
            status => ApiError::Unexpected {
                status: status.as_u16(),
                message,
            },
        };
        Err(err.into())
    }

    /// Issue a request and parse the JSON response body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let response = self.execute(method, path, body).await?;
        response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }

    /// Issue a request where only the status matters.
    async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.execute(method, path, body).await?;
        Ok(())
    }
}

/// Extract the optional `message` field from an error body, falling back to
/// the raw text.
async fn error_message(response: reqwest::Response) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            if text.is_empty() {
                "no error detail provided".to_string()
            } else {
                text
            }
        })
}

#[async_trait]
impl TeamApi for PlatformClient {
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team> {
        let body = serde_json::to_value(&request)?;
        self.request_json(Method::POST, "/api/teams", Some(body))
            .await
    }

    async fn add_team_member(&self, team_id: &str, member_id: &str) -> Result<()> {
        let body = serde_json::to_value(AddMemberRequest {
            member_id: member_id.to_string(),
        })?;
        let path = format!("/api/teams/team/{}", team_id);
        self.request_unit(Method::POST, &path, Some(body)).await
    }

    async fn list_available_members(&self) -> Result<Vec<AvailableMember>> {
        self.request_json(Method::GET, "/api/members", None).await
    }

    async fn teams_joined(&self, user_id: &str) -> Result<usize> {
        #[derive(Deserialize)]
        struct TeamsJoinedResponse {
            #[serde(rename = "teamsJoined")]
            teams_joined: usize,
        }

        let path = format!("/api/teams/joined/{}", user_id);
        let response: TeamsJoinedResponse = self.request_json(Method::GET, &path, None).await?;
        Ok(response.teams_joined)
    }
}

#[async_trait]
impl InvitationApi for PlatformClient {
    async fn list_pending_invitations(&self, user_id: &str) -> Result<Vec<Invitation>> {
        #[derive(Deserialize)]
        struct InvitationListResponse {
            data: Vec<Invitation>,
        }

        let path = format!("/api/invitations/{}", user_id);
        let response: InvitationListResponse = self.request_json(Method::GET, &path, None).await?;
        Ok(response.data)
    }

    async fn update_invitation_status(
        &self,
        invitation_id: &str,
        status: InvitationStatus,
        teams_joined: usize,
    ) -> Result<()> {
        let body = serde_json::to_value(UpdateInvitationRequest {
            status,
            teams_joined,
        })?;
        let path = format!("/api/invitations/invitation/{}", invitation_id);
        self.request_unit(Method::PUT, &path, Some(body)).await
    }
}

#[async_trait]
impl NotificationApi for PlatformClient {
    async fn list_notifications(&self, user_id: &str) -> Result<NotificationBatches> {
        #[derive(Deserialize)]
        struct NotificationListResponse {
            data: NotificationBatches,
        }

        let path = format!("/api/notifications/{}", user_id);
        let response: NotificationListResponse =
            self.request_json(Method::GET, &path, None).await?;
        Ok(response.data)
    }

    async fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        let path = format!("/api/notifications/notification/{}", notification_id);
        self.request_unit(Method::PUT, &path, Some(serde_json::json!({ "read": true })))
            .await
    }
}
