/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http: request id / trace / limit / timeout
 * - subject: JWT の sub を extensions と span に載せる
 */
pub mod http;
pub mod subject;
