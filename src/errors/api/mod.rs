use crate::errors::internal::{
    ClubError, DatabaseError, InternalError, LoginError, RequestError, SessionError, TagError,
    UserError,
};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;


/// Error responses shared by every endpoint
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Missing, unknown or expired session token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Missing required field or malformed identifier pair
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Lookup target does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Uniqueness violation on create or rename
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(Json(ErrorResponse {
            error: "unauthorized".to_string(),
            message: message.into(),
            status_code: 401,
        }))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(Json(ErrorResponse {
            error: "bad_request".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(Json(ErrorResponse {
            error: "conflict".to_string(),
            message: message.into(),
            status_code: 409,
        }))
    }

    /// Generic 500; internal details stay in the logs
    fn internal_server_error() -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the only conversion point from internal errors to API errors.
    /// Every internal error maps to exactly one response kind.
    pub fn from_internal_error(err: InternalError) -> Self {
        let message = err.to_string();
        match &err {
            // Infrastructure errors - log and return generic error
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            InternalError::Database(_) => {
                tracing::error!("Transaction error: {}", err);
                Self::internal_server_error()
            }
            InternalError::Crypto { operation, .. } => {
                tracing::error!("Crypto error in {}: {}", operation, err);
                Self::internal_server_error()
            }

            InternalError::Session(SessionError::MissingToken) => {
                tracing::debug!("Request without session token");
                Self::unauthorized("permission denied")
            }
            InternalError::Session(SessionError::InvalidToken | SessionError::Expired) => {
                tracing::debug!("Rejected session: {}", message);
                Self::unauthorized("permission denied")
            }

            InternalError::Request(RequestError::MissingField { .. } | RequestError::MissingOneOf { .. }) => {
                tracing::debug!("Malformed request: {}", message);
                Self::bad_request(message)
            }

            InternalError::Club(ClubError::Duplicate { .. } | ClubError::NameConflict { .. }) => {
                tracing::warn!("Club conflict: {}", message);
                Self::conflict(message)
            }
            InternalError::Club(ClubError::Mismatch { .. } | ClubError::UnknownCode { .. }) => {
                tracing::debug!("Club identifier rejected: {}", message);
                Self::bad_request(message)
            }
            InternalError::Club(ClubError::NotFound) => Self::not_found(message),

            InternalError::Tag(TagError::NotFound { .. }) => Self::not_found(message),

            InternalError::User(UserError::Duplicate { .. }) => {
                tracing::warn!("User conflict: {}", message);
                Self::conflict(message)
            }
            InternalError::User(UserError::NotFound) => Self::not_found(message),

            // Same body for both so the response does not reveal which emails exist
            InternalError::Login(LoginError::UnknownEmail { .. } | LoginError::IncorrectPassword) => {
                tracing::debug!("Login failed: {}", message);
                Self::bad_request("Invalid email or password")
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized(json) => json.0.message.clone(),
            ApiError::BadRequest(json) => json.0.message.clone(),
            ApiError::NotFound(json) => json.0.message.clone(),
            ApiError::Conflict(json) => json.0.message.clone(),
            ApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
