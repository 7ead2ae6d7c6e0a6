use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Entry of the full club listing
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ClubListItem {
    pub code: String,
    pub name: String,
    /// Number of users who favorited the club
    pub favorite_count: u64,
}

/// Club as returned by search
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ClubDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    /// Lowercase tag names, sorted
    pub tags: Vec<String>,
    pub favorite_count: u64,
}

/// Club as listed among a user's favorites
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ClubSummary {
    pub code: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Minimal club reference used by tag search
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRef {
    pub code: String,
    pub name: String,
}

/// Request model for creating a club
///
/// Every field is optional at the wire level: the session token is checked
/// before required fields, so decoding must not reject a partial body.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct CreateClubRequest {
    pub session_token: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Fields that may be changed on an existing club. Unknown keys are ignored.
#[derive(Object, Debug, Default, Clone, Serialize, Deserialize)]
pub struct ClubPatchRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Replaces the whole tag set
    pub tags: Option<Vec<String>>,
}

/// Request model for modifying a club identified by its (code, name) pair
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct ModifyClubRequest {
    pub session_token: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub new_data: Option<ClubPatchRequest>,
}

/// Request model for deleting a club identified by its (code, name) pair
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct DeleteClubRequest {
    pub session_token: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
}
