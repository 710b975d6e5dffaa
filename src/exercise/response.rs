//! # Response Formatting
//!
//! Indented JSON bodies, matching the 4-space layout clients of the
//! service already parse and diff against.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// JSON response rendered with a 4-space indent
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

/// Serialize `value` with a 4-space indent
pub fn to_indented_vec<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        match to_indented_vec(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                body,
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("text/plain; charset=utf-8"),
                )],
                e.to_string(),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_array_stays_compact() {
        let empty: Vec<u8> = Vec::new();
        let body = to_indented_vec(&empty).unwrap();
        assert_eq!(body, b"[]");
    }

    #[test]
    fn test_four_space_indent() {
        let body = to_indented_vec(&json!({"message": "Not found"})).unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "{\n    \"message\": \"Not found\"\n}"
        );
    }

    #[test]
    fn test_content_type_header() {
        let response = IndentedJson(json!([])).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
    }
}
