//! `sub` claim extraction from a request-supplied JWT.
//!
//! NOTE: the token is decoded, never verified. The result is fit for log
//! fields and routing keys, not for access decisions.

use serde_json::{Number, Value};

use super::decode::decode;
use super::request::RequestView;

pub const TOKEN_QUERY_ARG: &str = "token";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Where the token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    QueryArg,
    ApiKeyHeader,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueryArg => "query",
            Self::ApiKeyHeader => "header",
        }
    }
}

/// Pick the token: non-empty `token` query argument first, then a non-empty
/// `x-api-key` header.
pub fn locate_token<R>(request: &R) -> Option<(TokenSource, String)>
where
    R: RequestView + ?Sized,
{
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

    non_empty(request.query_arg(TOKEN_QUERY_ARG))
        .map(|token| (TokenSource::QueryArg, token))
        .or_else(|| {
            non_empty(request.header(API_KEY_HEADER))
                .map(|token| (TokenSource::ApiKeyHeader, token))
        })
}

/// `sub` of an already located token, or `""` if it cannot be decoded.
pub fn subject_from_token(token: &str) -> String {
    match decode(Some(token)) {
        Ok(Some(decoded)) => subject_claim(&decoded.payload),
        Ok(None) | Err(_) => String::new(),
    }
}

/// `sub` of the request's token; `""` when there is no token or it is malformed.
pub fn extract_subject<R>(request: &R) -> String
where
    R: RequestView + ?Sized,
{
    locate_token(request)
        .map(|(_, token)| subject_from_token(&token))
        .unwrap_or_default()
}

fn subject_claim(payload: &Value) -> String {
    match payload.get("sub") {
        Some(Value::String(sub)) => sub.clone(),
        Some(Value::Number(n)) => render_number(n),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// Same text a JS `String(n)` gives for the common cases: whole floats lose
// their `.0` and `-0` prints as `0`.
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 => {
            if f == 0.0 {
                "0".to_string()
            } else if f.abs() < 1e21 {
                format!("{f:.0}")
            } else {
                n.to_string()
            }
        }
        _ => n.to_string(),
    }
}
