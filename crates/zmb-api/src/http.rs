//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (404 → not found, 401/403 → unauthorized,
//! 429 rate limiting with `Retry-After` parsing, other non-success →
//! [`ApiError::Api`]) so endpoint modules stay focused on request
//! construction and response mapping.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match status.as_u16() {
        404 => Err(ApiError::NotFound {
            resource: resp.url().path().to_string(),
        }),
        code @ (401 | 403) => Err(ApiError::Unauthorized { status: code }),
        429 => Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        }),
        code => Err(ApiError::Api {
            status: code,
            message: error_message(resp.text().await.unwrap_or_default()),
        }),
    }
}

/// Decode a JSON body, reporting the body snippet on failure.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|error| {
        let snippet: String = body.chars().take(120).collect();
        ApiError::Parse(format!("{error} (body: {snippet})"))
    })
}

/// List endpoints answer either a bare array or `{ "data": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListBody<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// The backend sends `{ "message": "..." }` on errors; fall back to the raw body.
fn error_message(body: String) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "soon");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let err = check_response(mock_response(404, "")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(403, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { status: 403 }));
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error_uses_message_field() {
        let resp = mock_response(422, r#"{"message":"slug already taken"}"#);
        let err = check_response(resp).await.unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "slug already taken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_plain_body() {
        let err = check_response(mock_response(500, "upstream down"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, ref message } if message == "upstream down"));
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "[]")).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_body_snippet() {
        let err = decode::<Vec<u32>>(mock_response(200, "<html>oops</html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(ref msg) if msg.contains("<html>oops")));
    }

    #[test]
    fn list_body_accepts_both_shapes() {
        let bare: ListBody<u32> = serde_json::from_str("[1,2]").unwrap();
        let wrapped: ListBody<u32> = serde_json::from_str(r#"{"data":[3]}"#).unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2]);
        assert_eq!(wrapped.into_vec(), vec![3]);
    }
}
