//! Push Config

use clap::Args;
use forecourt_app::notifications::{DEFAULT_FCM_ENDPOINT, FcmConfig};
use jiff::SignedDuration;
use zeroize::Zeroizing;

const MAX_TOKEN_TTL_DAYS: i64 = 36_500;

/// Push notification settings.
#[derive(Debug, Args)]
pub struct PushConfig {
    /// Cloud messaging server key; push is skipped when unset
    #[arg(long, env = "FCM_SERVER_KEY", hide_env_values = true)]
    pub fcm_server_key: Option<String>,

    /// Cloud messaging send endpoint
    #[arg(long, env = "FCM_ENDPOINT", default_value = DEFAULT_FCM_ENDPOINT)]
    pub fcm_endpoint: String,

    /// Days a registered device token stays valid, at most 100 years
    #[arg(
        long,
        env = "DEVICE_TOKEN_TTL_DAYS",
        default_value_t = 60_u32,
        value_parser = clap::value_parser!(u32).range(1..=MAX_TOKEN_TTL_DAYS)
    )]
    pub device_token_ttl_days: u32,
}

impl PushConfig {
    /// Gateway settings, when a server key is configured.
    pub(crate) fn fcm(&self) -> Option<FcmConfig> {
        let key = self.fcm_server_key.as_deref().filter(|key| !key.trim().is_empty())?;

        Some(FcmConfig {
            server_key: Zeroizing::new(key.to_string()),
            endpoint: self.fcm_endpoint.clone(),
        })
    }

    pub(crate) fn token_ttl(&self) -> SignedDuration {
        SignedDuration::from_hours(i64::from(self.device_token_ttl_days) * 24)
    }
}
