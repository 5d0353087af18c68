/*
 * Responsibility
 * - GET /subject の response DTO
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub sub: String,
}
