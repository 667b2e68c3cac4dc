//! Failures of calls to the admin API and how the UI reacts to them.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered 401. Ends the session wherever it happens.
    #[error("Your session has expired. Please sign in again.")]
    Unauthenticated,

    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        code: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("The request timed out")]
    Timeout,

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to build request: {0}")]
    Encode(String),

    /// The server answered but the requested record is not in the response
    #[error("{0}")]
    Missing(String),
}

/// Error shape rendered in toasts: message, optional code, optional status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub message: String,
    pub code: Option<String>,
    pub status: Option<u16>,
}

/// What the top-level policy does with a failed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Clear the session and go to the login page
    EndSession,
    /// Show a transient notification and keep going
    Notify(AppError),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "Message", alias = "error")]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl ApiError {
    /// Classify a non-success response to a call made with a session token
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthenticated;
        }
        Self::from_anonymous_response(status, body)
    }

    /// Classify a non-success response to a call made without a token. There
    /// is no session to end, so a 401 (bad credentials) keeps the server's
    /// message like any other status.
    pub fn from_anonymous_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Http {
            status,
            message,
            code: parsed.code,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Only transport failures and 5xx answers are worth a second attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout => true,
            ApiError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let code = match self {
            ApiError::Unauthenticated => Some("UNAUTHENTICATED".to_string()),
            ApiError::Http { code, .. } => code.clone(),
            ApiError::Network(_) => Some("NETWORK".to_string()),
            ApiError::Timeout => Some("TIMEOUT".to_string()),
            ApiError::Decode(_) => Some("DECODE".to_string()),
            ApiError::Encode(_) => Some("ENCODE".to_string()),
            ApiError::Missing(_) => Some("NOT_FOUND".to_string()),
        };
        AppError {
            message: self.to_string(),
            code,
            status: self.status(),
        }
    }

    pub fn disposition(&self) -> ErrorDisposition {
        match self {
            ApiError::Unauthenticated => ErrorDisposition::EndSession,
            other => ErrorDisposition::Notify(other.to_app_error()),
        }
    }
}

/// Dispositions for failures reported in the same tick. A single
/// `EndSession` replaces the whole batch; the rest would only repeat it.
pub fn dispositions(errors: &[ApiError]) -> Vec<ErrorDisposition> {
    let all: Vec<ErrorDisposition> = errors.iter().map(ApiError::disposition).collect();
    if all.contains(&ErrorDisposition::EndSession) {
        vec![ErrorDisposition::EndSession]
    } else {
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthenticated() {
        let err = ApiError::from_response(401, r#"{"message":"jwt expired"}"#);
        assert_eq!(err, ApiError::Unauthenticated);
        assert_eq!(err.disposition(), ErrorDisposition::EndSession);
    }

    #[test]
    fn test_401_without_token_keeps_server_message() {
        let err = ApiError::from_anonymous_response(401, r#"{"success":false,"message":"Invalid credentials"}"#);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), Some(401));
        assert!(matches!(err.disposition(), ErrorDisposition::Notify(_)));
    }

    #[test]
    fn test_server_message_preferred() {
        let err = ApiError::from_response(400, r#"{"success":false,"message":"Brand exists"}"#);
        assert_eq!(err.to_string(), "Brand exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_capitalized_message_field() {
        let err = ApiError::from_response(422, r#"{"Message":"Invalid id"}"#);
        assert_eq!(err.to_string(), "Invalid id");
    }

    #[test]
    fn test_fallback_message_for_non_json_body() {
        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_retry_classification() {
        assert!(ApiError::Network("offline".into()).is_retryable());
        assert!(ApiError::Timeout.is_retryable());
        assert!(!ApiError::from_response(404, "").is_retryable());
        assert!(!ApiError::Unauthenticated.is_retryable());
        assert!(!ApiError::Decode("eof".into()).is_retryable());
    }

    #[test]
    fn test_batch_keeps_every_notice() {
        let batch = [
            ApiError::from_response(500, r#"{"message":"Brands down"}"#),
            ApiError::Timeout,
        ];
        let out = dispositions(&batch);
        assert_eq!(out.len(), 2);
        assert!(matches!(&out[0], ErrorDisposition::Notify(app) if app.message == "Brands down"));
        assert!(matches!(&out[1], ErrorDisposition::Notify(app) if app.code.as_deref() == Some("TIMEOUT")));
    }

    #[test]
    fn test_batch_end_session_wins() {
        let batch = [
            ApiError::Network("offline".into()),
            ApiError::Unauthenticated,
            ApiError::from_response(404, ""),
        ];
        assert_eq!(dispositions(&batch), vec![ErrorDisposition::EndSession]);
        assert!(dispositions(&[]).is_empty());
    }

    #[test]
    fn test_notify_normalizes_triple() {
        let err = ApiError::from_response(409, r#"{"message":"Conflict","code":"DUP"}"#);
        match err.disposition() {
            ErrorDisposition::Notify(app) => {
                assert_eq!(app.message, "Conflict");
                assert_eq!(app.code.as_deref(), Some("DUP"));
                assert_eq!(app.status, Some(409));
            }
            other => panic!("unexpected disposition: {other:?}"),
        }
    }
}
