/*
 * Responsibility
 * - GET /subject (gateway の auth_request 先)
 * - subject を response header と JSON body で返す
 * - token が無い・壊れている場合も 200 + 空文字 (fail open)
 */
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::{
    api::v1::{dto::subject::SubjectResponse, extractors::SubjectExtractor},
    state::AppState,
};

pub async fn subject(
    State(state): State<AppState>,
    SubjectExtractor(subject): SubjectExtractor,
) -> impl IntoResponse {
    // Not every `sub` is a legal header value (e.g. control characters).
    let value =
        HeaderValue::from_str(subject.as_str()).unwrap_or_else(|_| HeaderValue::from_static(""));

    let mut headers = HeaderMap::new();
    headers.insert(state.subject_header.clone(), value);

    (
        StatusCode::OK,
        headers,
        Json(SubjectResponse {
            sub: subject.into_inner(),
        }),
    )
}
