//! Unverified JWT structure decoding.
//!
//! Splits a compact JWT on `.` and parses the header and payload segments as
//! base64url-encoded JSON. The signature segment (and anything after it) is
//! never looked at: nothing here establishes trust in the token.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;
use std::{fmt, string::FromUtf8Error};

// base64url alphabet, padding optional, non-canonical final bits tolerated.
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Which of the two consumed JWT segments a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => write!(f, "header"),
            Segment::Payload => write!(f, "payload"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing {0} segment")]
    MissingSegment(Segment),
    #[error("{segment} segment is not valid base64url")]
    Base64 {
        segment: Segment,
        source: base64::DecodeError,
    },
    #[error("{segment} segment is not valid utf-8")]
    Utf8 {
        segment: Segment,
        source: FromUtf8Error,
    },
    #[error("{segment} segment is not valid json")]
    Json {
        segment: Segment,
        source: serde_json::Error,
    },
}

/// Header and payload of a JWT, parsed but not verified.
///
/// Both sides are kept as loose JSON values: the header is not required to
/// carry `alg`, and the payload is not required to be an object.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub headers: Value,
    pub payload: Value,
}

/// Decode the first two segments of a compact JWT.
///
/// - `None` or an empty string yields `Ok(None)`.
/// - Fewer than two segments, bad base64url, bad UTF-8 or bad JSON is an error.
pub fn decode(raw: Option<&str>) -> Result<Option<DecodedToken>, DecodeError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let mut parts = raw.split('.');
    let headers = decode_segment(parts.next(), Segment::Header)?;
    let payload = decode_segment(parts.next(), Segment::Payload)?;

    Ok(Some(DecodedToken { headers, payload }))
}

fn decode_segment(part: Option<&str>, segment: Segment) -> Result<Value, DecodeError> {
    let part = part.ok_or(DecodeError::MissingSegment(segment))?;

    let bytes = SEGMENT_ENGINE
        .decode(part)
        .map_err(|source| DecodeError::Base64 { segment, source })?;
    let text = String::from_utf8(bytes).map_err(|source| DecodeError::Utf8 { segment, source })?;

    serde_json::from_str(&text).map_err(|source| DecodeError::Json { segment, source })
}
