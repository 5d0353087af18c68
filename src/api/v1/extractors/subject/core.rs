use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::services::jwt::{ForwardedRequest, extract_subject};

use super::Subject;

/// Handler で Subject を受け取るための extractor
/// 通常は middleware が extensions に insert 済み。
/// 無い場合 (middleware 未設定) はここで計算する。失敗しても空文字で通す
pub struct SubjectExtractor(pub Subject);

impl<S> FromRequestParts<S> for SubjectExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let subject = match parts.extensions.get::<Subject>() {
            Some(subject) => subject.clone(),
            None => Subject::new(extract_subject(&ForwardedRequest::from_parts(parts))),
        };
        Ok(SubjectExtractor(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};

    fn parts(uri: &str, api_key: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(key) = api_key {
            builder = builder.header("x-api-key", key);
        }
        builder.body(Body::empty()).expect("build request").into_parts().0
    }

    #[tokio::test]
    async fn uses_subject_from_extensions_when_present() {
        let mut parts = parts("/", None);
        parts.extensions.insert(Subject::new("from-middleware"));

        let SubjectExtractor(subject) = SubjectExtractor::from_request_parts(&mut parts, &())
            .await
            .expect("infallible");
        assert_eq!(subject.as_str(), "from-middleware");
    }

    #[tokio::test]
    async fn computes_subject_without_middleware() {
        // {"alg":"none"} . {"sub":"erin"}
        let token = "eyJhbGciOiJub25lIn0.eyJzdWIiOiJlcmluIn0.";
        let mut parts = parts("/", Some(token));

        let SubjectExtractor(subject) = SubjectExtractor::from_request_parts(&mut parts, &())
            .await
            .expect("infallible");
        assert_eq!(subject.as_str(), "erin");
    }

    #[tokio::test]
    async fn no_token_is_empty_subject() {
        let mut parts = parts("/", None);
        let SubjectExtractor(subject) = SubjectExtractor::from_request_parts(&mut parts, &())
            .await
            .expect("infallible");
        assert!(subject.is_empty());
    }
}
