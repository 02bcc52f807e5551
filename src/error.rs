//! API Error Types

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// Transport failure (network, CORS, aborted fetch)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Refresh succeeded at HTTP level but carried no access token
    #[error("refresh response carried no access token")]
    MissingToken,

    /// Session could not be refreshed; the user has to log in again
    #[error("session expired")]
    SessionExpired,

    /// Call was cancelled before it completed
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::SessionExpired | ApiError::MissingToken) || self.status() == Some(401)
    }

    /// Server-provided `detail`, or `fallback` for inline form errors
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { detail: Some(detail), .. } if !detail.trim().is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Extract a human-readable `detail` from an error body.
///
/// Accepts `{"detail": "..."}` and validation arrays
/// `{"detail": [{"msg": "..."}, ...]}`.
pub fn parse_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(entries) => {
            let msgs: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join(", ")) }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_string() {
        assert_eq!(parse_detail(r#"{"detail":"아이디 또는 비밀번호가 올바르지 않습니다."}"#).as_deref(),
            Some("아이디 또는 비밀번호가 올바르지 않습니다."));
    }

    #[test]
    fn test_parse_detail_validation_array() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
        assert_eq!(parse_detail(body).as_deref(), Some("value is not a valid email address, field required"));
    }

    #[test]
    fn test_parse_detail_missing() {
        assert_eq!(parse_detail("<html>502</html>"), None);
        assert_eq!(parse_detail(r#"{"error":"x"}"#), None);
        assert_eq!(parse_detail(r#"{"detail":[]}"#), None);
    }

    #[test]
    fn test_message_or() {
        let err = ApiError::Status { status: 400, detail: Some("이미 존재하는 아이디입니다.".into()) };
        assert_eq!(err.message_or("회원가입에 실패했어요."), "이미 존재하는 아이디입니다.");

        let bare = ApiError::Status { status: 500, detail: None };
        assert_eq!(bare.message_or("회원가입에 실패했어요."), "회원가입에 실패했어요.");
        assert_eq!(ApiError::SessionExpired.message_or("x"), "x");
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::Status { status: 401, detail: None }.is_unauthorized());
        assert!(ApiError::SessionExpired.is_unauthorized());
        assert!(!ApiError::Status { status: 404, detail: None }.is_unauthorized());
    }
}
