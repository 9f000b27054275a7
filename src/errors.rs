use astra::Response;
use std::fmt;

/// Errors originating from routing/validation, the caller's session,
/// or a downstream collaborator (hosted store, OAuth provider).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// No valid session on a route that needs one.
    Unauthorized,
    /// Valid session, but the caller does not own the target resource.
    Forbidden(String),
    /// The hosted data store failed or returned something unusable.
    StoreError(String),
    /// The OAuth provider failed or returned something unusable.
    AuthError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Unauthorized => write!(f, "Sign in required"),
            ServerError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            ServerError::StoreError(msg) => write!(f, "Store Error: {msg}"),
            ServerError::AuthError(msg) => write!(f, "Auth Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
