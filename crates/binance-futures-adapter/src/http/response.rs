/*
[INPUT]:  HTTP status code and raw response body
[OUTPUT]: ApiOutcome (success payload or exchange failure) or transport error
[POS]:    HTTP layer - response interpretation shared by every endpoint
[UPDATE]: When the exchange error envelope or status handling changes
*/

use reqwest::StatusCode;
use serde_json::Value;

use crate::http::{FuturesError, Result};
use crate::types::{ApiFailure, ApiOutcome, RawResponse};

const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
const BODY_SNIPPET_LIMIT: usize = 256;

/// Interpret one HTTP response.
///
/// Bodies that are not a JSON object are never treated as success: on an
/// error status they surface as [`FuturesError::HttpStatus`], otherwise as
/// [`FuturesError::NonJsonResponse`].
pub fn classify(status: StatusCode, body: &[u8]) -> Result<ApiOutcome> {
    let Some(data) = parse_object(body) else {
        return Err(if is_error_status(status) {
            FuturesError::HttpStatus {
                status: status.as_u16(),
                body: body_snippet(body),
            }
        } else {
            FuturesError::NonJsonResponse {
                status: status.as_u16(),
            }
        });
    };

    if is_error_status(status) {
        let raw_code = data.get("code").filter(|value| !value.is_null());
        let code = raw_code.and_then(numeric_code);
        let mut message = data
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
            .to_string();
        // Keep non-numeric identifiers visible.
        if let (None, Some(raw)) = (code, raw_code) {
            message = format!("{message} (code {raw})");
        }
        return Ok(ApiOutcome::Failure(ApiFailure {
            http_status: status.as_u16(),
            code,
            message,
        }));
    }

    Ok(ApiOutcome::Success(data))
}

fn is_error_status(status: StatusCode) -> bool {
    status.as_u16() >= 400
}

fn numeric_code(value: &Value) -> Option<i64> {
    match value {
        Value::String(text) => text.trim().parse().ok(),
        other => other.as_i64(),
    }
}

fn parse_object(body: &[u8]) -> Option<RawResponse> {
    match serde_json::from_slice::<Value>(body).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    match trimmed.char_indices().nth(BODY_SNIPPET_LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_success_payload() {
        let body = br#"{"orderId":1,"status":"FILLED","executedQty":"10","avgPrice":"100.5"}"#;
        let outcome = classify(StatusCode::OK, body).unwrap();

        let ApiOutcome::Success(data) = outcome else {
            panic!("expected success");
        };
        assert_eq!(data["orderId"], json!(1));
        assert_eq!(data["status"], json!("FILLED"));
        assert_eq!(data["executedQty"], json!("10"));
        assert_eq!(data["avgPrice"], json!("100.5"));
    }

    #[test]
    fn test_api_error_envelope() {
        let body = br#"{"code":-1021,"msg":"Timestamp outside recvWindow"}"#;
        let outcome = classify(StatusCode::BAD_REQUEST, body).unwrap();

        assert_eq!(
            outcome,
            ApiOutcome::Failure(ApiFailure {
                http_status: 400,
                code: Some(-1021),
                message: "Timestamp outside recvWindow".to_string(),
            })
        );
    }

    #[test]
    fn test_error_without_fields() {
        let outcome = classify(StatusCode::FORBIDDEN, b"{}").unwrap();
        assert_eq!(
            outcome,
            ApiOutcome::Failure(ApiFailure {
                http_status: 403,
                code: None,
                message: "Unknown error".to_string(),
            })
        );
    }

    #[rstest]
    #[case(r#"{"code":"-2019","msg":"Margin is insufficient."}"#, Some(-2019), "Margin is insufficient.")]
    #[case(r#"{"code":"E_RATE","msg":"Slow down"}"#, None, r#"Slow down (code "E_RATE")"#)]
    #[case(r#"{"code":-1.5,"msg":"odd"}"#, None, "odd (code -1.5)")]
    #[case(r#"{"code":null,"msg":"no code"}"#, None, "no code")]
    fn test_error_code_shapes(
        #[case] body: &str,
        #[case] expected_code: Option<i64>,
        #[case] expected_message: &str,
    ) {
        let outcome = classify(StatusCode::BAD_REQUEST, body.as_bytes()).unwrap();
        let ApiOutcome::Failure(failure) = outcome else {
            panic!("expected failure");
        };
        assert_eq!(failure.code, expected_code);
        assert_eq!(failure.message, expected_message);
    }

    #[rstest]
    #[case(&b"<html>ok</html>"[..])]
    #[case(&b""[..])]
    #[case(&b"[1,2,3]"[..])]
    fn test_unparseable_success_is_error(#[case] body: &[u8]) {
        let err = classify(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, FuturesError::NonJsonResponse { status: 200 }));
    }

    #[test]
    fn test_unparseable_error_status_is_transport_failure() {
        let err = classify(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>").unwrap_err();
        match err {
            FuturesError::HttpStatus { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_body_snippet_truncates() {
        let long = "x".repeat(BODY_SNIPPET_LIMIT + 10);
        let snippet = body_snippet(long.as_bytes());
        assert_eq!(snippet.len(), BODY_SNIPPET_LIMIT + 3);
        assert!(snippet.ends_with("..."));
    }
}
