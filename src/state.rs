/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: subject を返す response header 名
 * - Clone 前提で持つ (中身は immutable)
 */
use axum::http::HeaderName;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub subject_header: HeaderName,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            subject_header: config.subject_header.clone(),
        }
    }
}
