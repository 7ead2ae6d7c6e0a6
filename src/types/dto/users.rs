use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Public view of a user; never carries credentials
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub username: String,
}

/// Request model for user login
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request model for user signup
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request model for logout
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub session_token: Option<String>,
}

/// Request model for favoriting a club
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub session_token: Option<String>,
    /// Code of the club to favorite
    pub code: Option<String>,
}

/// Response carrying a freshly issued session token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Bearer credential valid until `expires_at`
    pub session_token: String,

    /// Unix timestamp after which the token is rejected
    pub expires_at: i64,
}
