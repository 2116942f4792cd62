//! Error taxonomy for backend calls.
//!
//! Every variant renders as a sentence a screen can show directly.

/// Errors returned by [`crate::Backend`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response (DNS, CORS, server down).
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The backend has no such route (404).
    #[error("The route '{url}' does not exist on the server")]
    RouteNotFound { url: String },

    /// Input rejected, field by field; carries the first field's first message.
    #[error("{0}")]
    Validation(String),

    /// A JSON error response without field errors (bad credentials, expired token).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A non-JSON error page, typically an unhandled server exception.
    #[error("Server error ({status}): the server returned an unexpected response")]
    Server { status: u16 },

    /// A success status whose body is missing or does not have the expected shape.
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Whether the backend refused the bearer token or the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401 | 419, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}
