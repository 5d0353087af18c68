/*!
 * JWT subject extractor
 *
 * Responsibility:
 * - request の token から読んだ subject (Subject) を handler に提供する
 * - axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - Subject
 * - SubjectExtractor
 */

mod core;
mod types;

pub use core::SubjectExtractor;
pub use types::Subject;
