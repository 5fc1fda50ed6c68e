use std::sync::Arc;

use crate::services::rtc::token_service::RtcTokenService;

#[derive(Clone)]
pub struct AppState {
    pub rtc: Arc<RtcTokenService>,
}

impl AppState {
    pub fn new(rtc: Arc<RtcTokenService>) -> Self {
        Self { rtc }
    }
}
