/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /subject
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, subject::subject};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/subject", get(subject))
}
