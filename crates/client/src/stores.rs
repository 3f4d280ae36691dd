//! Store availability (busy mode) sweeps.
//!
//! The platform models "closed" as a busy-mode preparation-time delay of
//! 999 minutes and "open" as a delay of 0. A sweep applies one mode to
//! every location of an account, or to every channel link of one channel
//! when a channel backend ID is given.

use tracing::{instrument, warn};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Busy-mode delay that closes a store.
const CLOSE_DELAY_MINUTES: u32 = 999;

/// Target availability state for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Accepting orders (delay 0).
    Open,
    /// Not accepting orders (delay 999).
    Closed,
}

impl StoreMode {
    /// The preparation-time delay the platform expects for this mode.
    #[must_use]
    pub const fn preparation_time_delay(self) -> u32 {
        match self {
            Self::Open => 0,
            Self::Closed => CLOSE_DELAY_MINUTES,
        }
    }
}

impl std::fmt::Display for StoreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Outcome of one availability sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyModeSweep {
    /// IDs that were switched successfully.
    pub updated: Vec<String>,
    /// IDs the platform refused to switch.
    pub failed: Vec<String>,
}

impl BusyModeSweep {
    /// Whether every target was switched.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

impl ApiClient {
    /// Set one location's busy mode.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the platform rejects it.
    #[instrument(skip(self), fields(location_id = %location_id))]
    pub async fn set_location_busy_mode(
        &self,
        location_id: &str,
        mode: StoreMode,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/location/{location_id}/busymode"));
        let payload = serde_json::json!({
            "locationId": location_id,
            "preparationTimeDelay": mode.preparation_time_delay(),
        });
        let _: serde_json::Value = self.post_json(&url, &payload).await?;
        Ok(())
    }

    /// Set one channel link's busy mode.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the platform rejects it.
    #[instrument(skip(self), fields(channel_link_id = %channel_link_id))]
    pub async fn set_channel_link_busy_mode(
        &self,
        channel_link_id: &str,
        mode: StoreMode,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/channellink/{channel_link_id}/busymode"));
        let payload = serde_json::json!({
            "channelLinkId": channel_link_id,
            "preparationTimeDelay": mode.preparation_time_delay(),
        });
        let _: serde_json::Value = self.post_json(&url, &payload).await?;
        Ok(())
    }

    /// Apply `mode` across an account.
    ///
    /// Without a channel, every location of the account is switched. With
    /// one, every channel link of that channel is switched instead. A
    /// rejected target is recorded and the sweep continues; only transport
    /// failures abort it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` when a channel is given but the
    /// account has no links on it, or another `ApiError` when enumeration
    /// fails.
    #[instrument(skip(self), fields(account = %account, mode = %mode))]
    pub async fn sweep_busy_mode(
        &self,
        account: &str,
        mode: StoreMode,
        channel: Option<i64>,
    ) -> Result<BusyModeSweep, ApiError> {
        let mut sweep = BusyModeSweep::default();

        match channel {
            None => {
                for location in self.list_locations(account).await? {
                    match self.set_location_busy_mode(&location.id, mode).await {
                        Ok(()) => sweep.updated.push(location.id),
                        Err(ApiError::Http(e)) => return Err(ApiError::Http(e)),
                        Err(e) => {
                            warn!(location_id = %location.id, error = %e, "busy mode update rejected");
                            sweep.failed.push(location.id);
                        }
                    }
                }
            }
            Some(backend_id) => {
                let groups = self.list_channel_links(account).await?;
                let group = groups
                    .into_iter()
                    .find(|group| group.channel_id == backend_id)
                    .ok_or_else(|| {
                        ApiError::NotFound(format!("channel {backend_id} for account {account}"))
                    })?;
                for link_id in group.channel_link_ids {
                    match self.set_channel_link_busy_mode(&link_id, mode).await {
                        Ok(()) => sweep.updated.push(link_id),
                        Err(ApiError::Http(e)) => return Err(ApiError::Http(e)),
                        Err(e) => {
                            warn!(channel_link_id = %link_id, error = %e, "busy mode update rejected");
                            sweep.failed.push(link_id);
                        }
                    }
                }
            }
        }

        Ok(sweep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_delays() {
        assert_eq!(StoreMode::Open.preparation_time_delay(), 0);
        assert_eq!(StoreMode::Closed.preparation_time_delay(), 999);
    }

    #[test]
    fn test_sweep_success_flag() {
        let mut sweep = BusyModeSweep::default();
        assert!(sweep.all_succeeded());
        sweep.failed.push("loc1".to_string());
        assert!(!sweep.all_succeeded());
    }
}
