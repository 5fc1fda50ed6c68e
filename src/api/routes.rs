use axum::{Router, routing::post};

use crate::api::handlers::token::generate_token;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/generate-token", post(generate_token))
        .with_state(state)
}
