/*
 * Responsibility
 * - JWT の構造だけを読む (header / payload の decode)
 * - request から token を探し、`sub` を文字列で返す
 * - 署名検証はしない。ここで得た値を認可に使わないこと
 */
pub mod decode;
pub mod request;
pub mod subject;

pub use decode::{DecodeError, DecodedToken, Segment, decode};
pub use request::{ForwardedRequest, ORIGINAL_URI_HEADER, RequestView};
pub use subject::{
    API_KEY_HEADER, TOKEN_QUERY_ARG, TokenSource, extract_subject, locate_token,
    subject_from_token,
};
