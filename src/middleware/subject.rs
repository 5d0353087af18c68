//! token から subject を読む → Subject を extensions に入れる
//!
//! - token は検証しない (decode のみ)。失敗は空の Subject として扱い、request は止めない
//! - 読んだ値は access log 用に TraceLayer の span (`jwt_sub`, `token_source`) に記録する
//! - query は `x-original-uri` があればそちらから読む (auth_request の subrequest 対策)

use axum::{Router, extract::Request, middleware, middleware::Next, response::Response};
use tracing::Span;

use crate::api::v1::extractors::Subject;
use crate::services::jwt::{ForwardedRequest, locate_token, subject_from_token};

/// Router 全体に subject の解決を掛ける。
///
/// `middleware::http::apply` より先に適用すること (span の内側で動かすため)。
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn(subject_middleware))
}

async fn subject_middleware(mut req: Request, next: Next) -> Response {
    let located = locate_token(&ForwardedRequest::new(req.uri(), req.headers()));
    let subject = located
        .as_ref()
        .map(|(_, token)| subject_from_token(token))
        .unwrap_or_default();

    let span = Span::current();
    span.record("jwt_sub", subject.as_str());
    if let Some((source, _)) = &located {
        span.record("token_source", source.as_str());
    }

    tracing::debug!(
        token_source = located.as_ref().map(|(source, _)| source.as_str()),
        subject_empty = subject.is_empty(),
        "jwt subject resolved"
    );

    req.extensions_mut().insert(Subject::new(subject));

    next.run(req).await
}
