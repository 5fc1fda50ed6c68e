use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::{token_request::GenerateTokenRequest, token_response::GenerateTokenResponse};
use crate::error::AppError;
use crate::state::AppState;

pub async fn generate_token(
    State(state): State<AppState>,
    Json(req): Json<GenerateTokenRequest>,
) -> Result<(StatusCode, Json<GenerateTokenResponse>), AppError> {
    // Missing, null, and empty all get the same fixed validation message.
    let channel_name = req
        .channel_name
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingParameters)?;
    let uid = req
        .uid
        .filter(|uid| !uid.is_empty())
        .ok_or(AppError::MissingParameters)?;

    // Normalize before calling out; the signer never sees a raw uid.
    let numeric_uid = uid
        .to_u32()
        .ok_or_else(|| AppError::InvalidUid("must be a base-10 unsigned integer".to_string()))?;

    let issued = state.rtc.issue(&channel_name, numeric_uid)?;

    Ok((
        StatusCode::OK,
        Json(GenerateTokenResponse {
            token: issued.token,
            app_id: issued.app_id,
            channel_name,
            uid,
            privilege_expired_ts: issued.privilege_expired_ts,
        }),
    ))
}
