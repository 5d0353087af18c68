//! Narrow read-only view of an inbound request.
//!
//! The subject extractor only needs two lookups: a query argument by name and
//! a header by name. Anything that can answer those can be handed to it.

use axum::http::{HeaderMap, Request, Uri, request::Parts};
use url::form_urlencoded;

/// Header a fronting proxy uses to pass the client's request target
/// (nginx: `proxy_set_header X-Original-URI $request_uri;`).
pub const ORIGINAL_URI_HEADER: &str = "x-original-uri";

pub trait RequestView {
    /// First value of the query argument `name`, percent-decoded.
    fn query_arg(&self, name: &str) -> Option<String>;

    /// Value of the header `name`. Non-visible-ASCII values count as absent.
    fn header(&self, name: &str) -> Option<String>;
}

fn query_arg_from(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn header_from(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

impl<B> RequestView for Request<B> {
    fn query_arg(&self, name: &str) -> Option<String> {
        query_arg_from(self.uri().query(), name)
    }

    fn header(&self, name: &str) -> Option<String> {
        header_from(self.headers(), name)
    }
}

impl RequestView for Parts {
    fn query_arg(&self, name: &str) -> Option<String> {
        query_arg_from(self.uri.query(), name)
    }

    fn header(&self, name: &str) -> Option<String> {
        header_from(&self.headers, name)
    }
}

/// Request view for a service sitting behind a proxy.
///
/// Query arguments come from [`ORIGINAL_URI_HEADER`] when the proxy sent it
/// (an `auth_request` subrequest has its own URI), otherwise from the request
/// URI itself. Headers are read as received.
#[derive(Debug, Clone, Copy)]
pub struct ForwardedRequest<'a> {
    uri: &'a Uri,
    headers: &'a HeaderMap,
}

impl<'a> ForwardedRequest<'a> {
    pub fn new(uri: &'a Uri, headers: &'a HeaderMap) -> Self {
        Self { uri, headers }
    }

    pub fn from_parts(parts: &'a Parts) -> Self {
        Self::new(&parts.uri, &parts.headers)
    }

    fn query(&self) -> Option<&'a str> {
        match self
            .headers
            .get(ORIGINAL_URI_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            Some(original) => original.split_once('?').map(|(_, query)| query),
            None => self.uri.query(),
        }
    }
}

impl RequestView for ForwardedRequest<'_> {
    fn query_arg(&self, name: &str) -> Option<String> {
        query_arg_from(self.query(), name)
    }

    fn header(&self, name: &str) -> Option<String> {
        header_from(self.headers, name)
    }
}
