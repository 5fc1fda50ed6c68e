use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::error::AppError;
use crate::services::rtc::signer::{ROLE_PUBLISHER, RtcSigner};

/// Privilege window for issued tokens (seconds). Two hours, after which the
/// client must request a fresh token before publishing again.
pub const PRIVILEGE_TTL_SECONDS: u32 = 7200;

/// Service that issues publisher tokens for a channel/uid pair.
///
/// Holds the Agora project credentials and delegates the actual signing to
/// an [`RtcSigner`]; everything else is expiry arithmetic and logging.
pub struct RtcTokenService {
    app_id: String,
    app_certificate: String,
    signer: Arc<dyn RtcSigner>,
}

impl RtcTokenService {
    pub fn new(app_id: String, app_certificate: String, signer: Arc<dyn RtcSigner>) -> Self {
        Self {
            app_id,
            app_certificate,
            signer,
        }
    }

    /// Issue a publisher token for `channel_name`/`uid`.
    ///
    /// The privilege expiry is request time + [`PRIVILEGE_TTL_SECONDS`].
    /// Nothing is persisted between calls; two requests for the same
    /// channel/uid yield independent tokens.
    pub fn issue(&self, channel_name: &str, uid: u32) -> Result<IssuedRtcToken, AppError> {
        let now = Utc::now().timestamp();
        let privilege_expired_ts = now + i64::from(PRIVILEGE_TTL_SECONDS);

        let token = self
            .signer
            .build_token_with_uid(
                &self.app_id,
                &self.app_certificate,
                channel_name,
                uid,
                ROLE_PUBLISHER,
                privilege_expired_ts as u32,
            )
            .map_err(|e| {
                error!(channel = %channel_name, uid, error = %e, "failed to generate token");
                AppError::TokenGeneration {
                    details: e.to_string(),
                }
            })?;

        info!(channel = %channel_name, uid, "generated token");

        Ok(IssuedRtcToken {
            token,
            app_id: self.app_id.clone(),
            privilege_expired_ts,
        })
    }
}

/// Service-level return type to keep the handler thin.
///
/// The handler maps this into the HTTP DTO together with the echoed request
/// fields.
#[derive(Clone, Debug)]
pub struct IssuedRtcToken {
    pub token: String,
    pub app_id: String,
    pub privilege_expired_ts: i64,
}
