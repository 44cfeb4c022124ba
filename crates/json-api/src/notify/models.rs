//! Notification Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use forecourt_app::notifications::DeviceToken;

/// Outcome of a notify request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotifyResponse {
    /// `false` only when the payload could not be read
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotifyResponse {
    pub(crate) fn ok() -> Self {
        NotifyResponse {
            ok: true,
            error: None,
        }
    }

    pub(crate) fn failed(error: impl ToString) -> Self {
        NotifyResponse {
            ok: false,
            error: Some(error.to_string()),
        }
    }
}

/// A device to receive push notifications.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterTokenRequest {
    /// Cloud messaging registration token
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeviceTokenResponse {
    pub token: String,
    pub registered_at: String,
}

impl From<DeviceToken> for DeviceTokenResponse {
    fn from(device: DeviceToken) -> Self {
        DeviceTokenResponse {
            token: device.token,
            registered_at: device.registered_at.to_string(),
        }
    }
}

/// Registered devices, oldest first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeviceTokensResponse {
    pub tokens: Vec<DeviceTokenResponse>,
}

/// A message pushed to every registered device.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BroadcastRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BroadcastResponse {
    pub ok: bool,

    /// `sent`, `skipped` or `failed`
    pub push: String,
}
