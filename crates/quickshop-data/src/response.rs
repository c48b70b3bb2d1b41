//! Buffered response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A fully buffered response.
///
/// Local files are surfaced as a `200` response so callers handle both
/// sources the same way.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Wrap the bytes of a local file.
    pub fn from_file(body: Vec<u8>) -> Self {
        Self::new(200, body)
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, if it has one.
    pub fn reason(&self) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Turn a non-2xx status into [`FetchError::HttpError`].
    ///
    /// The message is the status reason phrase, the same text a browser
    /// reports as `statusText`.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(FetchError::HttpError {
            status: self.status,
            message: self.reason().unwrap_or("Unknown Status").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, Vec::new()).is_success());
        assert!(Response::new(299, Vec::new()).is_success());
        assert!(!Response::new(199, Vec::new()).is_success());
        assert!(!Response::new(304, Vec::new()).is_success());
    }

    #[test]
    fn test_from_file_passes_status_check() {
        let resp = Response::from_file(b"[]".to_vec());
        let resp = resp.error_for_status().unwrap();
        assert_eq!(resp.json::<Vec<u8>>().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_json_decode_error() {
        let result: Result<Vec<String>, _> = Response::new(200, b"not json".to_vec()).json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_error_for_status_uses_reason_phrase() {
        match Response::new(404, b"missing".to_vec()).error_for_status() {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected HttpError, got {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_unknown_code() {
        let err = Response::new(599, Vec::new()).error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 599 Unknown Status");
    }
}
