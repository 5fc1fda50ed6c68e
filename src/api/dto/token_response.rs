use serde::Serialize;

use crate::api::dto::token_request::Uid;

/// Response body for a successfully issued token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenResponse {
    /// Signed RTC token, opaque to this service.
    pub token: String,
    pub app_id: String,
    pub channel_name: String,
    /// Echoed back exactly as submitted (string stays string, number stays
    /// number).
    pub uid: Uid,
    /// Unix timestamp (seconds) at which the granted privileges lapse.
    pub privilege_expired_ts: i64,
}
