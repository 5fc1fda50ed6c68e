use std::panic;

use agora_token_builder::RtcTokenBuilder;
use thiserror::Error;

/// Role id granting publish rights, as defined by the Agora token scheme.
pub const ROLE_PUBLISHER: u32 = 1;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("token builder returned an empty token")]
    EmptyToken,

    #[error("token builder failed: {0}")]
    BuildFailed(String),
}

/// Boundary to the external Agora credential scheme.
///
/// The byte layout, privilege bit-packing, and signing-key derivation live
/// entirely in the wrapped library. This trait exists so the service sees a
/// typed result instead of library internals, and so tests can substitute a
/// failing signer.
pub trait RtcSigner: Send + Sync {
    fn build_token_with_uid(
        &self,
        app_id: &str,
        app_certificate: &str,
        channel_name: &str,
        uid: u32,
        role: u32,
        privilege_expired_ts: u32,
    ) -> Result<String, SignerError>;
}

/// Production signer backed by the `agora_token_builder` crate.
pub struct AgoraSigner;

impl RtcSigner for AgoraSigner {
    fn build_token_with_uid(
        &self,
        app_id: &str,
        app_certificate: &str,
        channel_name: &str,
        uid: u32,
        role: u32,
        privilege_expired_ts: u32,
    ) -> Result<String, SignerError> {
        // The library signals bad input by panicking, so the call is fenced
        // with catch_unwind and surfaced as a typed error.
        let token = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            RtcTokenBuilder::build_token_with_uid(
                app_id,
                app_certificate,
                channel_name,
                uid,
                role,
                privilege_expired_ts,
            )
        }))
        .map_err(|cause| SignerError::BuildFailed(panic_message(cause.as_ref())))?;

        if token.is_empty() {
            return Err(SignerError::EmptyToken);
        }

        Ok(token)
    }
}

fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure inside token builder".to_string()
    }
}
