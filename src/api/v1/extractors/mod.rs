/*
 * Responsibility
 * - handler 向け extractor の公開インターフェース (re-export)
 */
mod subject;

pub use subject::{Subject, SubjectExtractor};
