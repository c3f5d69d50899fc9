//! Team platform API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod platform;

pub use api::{InvitationApi, NotificationApi, TeamApi};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockPlatformClient;
pub use platform::PlatformClient;

/// The full platform API surface.
///
/// Combines the responsibility-focused sub-traits; anything implementing all
/// three gets this for free.
pub trait PlatformApi: TeamApi + InvitationApi + NotificationApi {}

impl<T: TeamApi + InvitationApi + NotificationApi> PlatformApi for T {}
