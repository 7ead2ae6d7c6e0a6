use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use super::clubs::ClubRef;

#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    /// Number of distinct clubs carrying the tag
    pub club_count: u64,
}

#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct TagClubs {
    pub name: String,
    pub clubs: Vec<ClubRef>,
}
