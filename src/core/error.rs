//! Error types for content loading.
//!
//! - [`FetchError`] - Transport failures for a single HTTP request
//! - [`ResolveError`] - Why a listing could not be produced

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// HTTP status code, when the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError(status) => Some(*status),
            _ => None,
        }
    }
}

/// Reasons a folder listing could not be resolved.
///
/// Every variant is caught at the resolver boundary and surfaced as an
/// empty [`ResolutionResult`](crate::models::ResolutionResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Fetch rejected, timed out or answered with a non-OK status.
    #[error(transparent)]
    Network(#[from] FetchError),
    /// Malformed JSON or a missing legacy element.
    #[error("Failed to parse {what}: {detail}")]
    Parse { what: &'static str, detail: String },
    /// A folder-specific request failed and no legacy equivalent exists.
    #[error("Unable to load content for folder '{path}'. {cause}")]
    NotFound { path: String, cause: FetchError },
    /// A newer navigation superseded this resolution.
    #[error("Resolution cancelled")]
    Cancelled,
}

impl ResolveError {
    pub fn parse(what: &'static str, detail: impl ToString) -> Self {
        Self::Parse {
            what,
            detail: detail.to_string(),
        }
    }

    /// HTTP status behind this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(cause) | Self::NotFound { cause, .. } => cause.status(),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passthrough() {
        let err = ResolveError::NotFound {
            path: "math".to_string(),
            cause: FetchError::HttpError(404),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "Unable to load content for folder 'math'. HTTP error: 404"
        );
        assert_eq!(ResolveError::from(FetchError::Timeout).status(), None);
    }

    #[test]
    fn test_parse_message() {
        let err = ResolveError::parse("legacy index", "element #blog-list not found");
        assert_eq!(
            err.to_string(),
            "Failed to parse legacy index: element #blog-list not found"
        );
    }
}
