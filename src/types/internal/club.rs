use std::collections::BTreeSet;

use crate::types::dto::clubs::{ClubPatchRequest, CreateClubRequest};
use crate::errors::internal::RequestError;

/// Club codes are stored and matched in lowercase
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Case-fold and deduplicate tag names, dropping blanks
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Validated input for creating a club
#[derive(Debug, Clone, PartialEq)]
pub struct NewClub {
    pub code: String,
    pub name: String,
    pub description: String,
    pub tags: BTreeSet<String>,
}

impl NewClub {
    pub fn new(
        code: &str,
        name: impl Into<String>,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        Self {
            code: normalize_code(code),
            name: name.into(),
            description: description.unwrap_or_default(),
            tags: normalize_tags(tags.unwrap_or_default()),
        }
    }

    /// Build from a create request whose session has already been checked
    pub fn from_request(req: CreateClubRequest) -> Result<Self, RequestError> {
        let code = RequestError::require(req.code, "code")?;
        let name = RequestError::require(req.name, "name")?;
        Ok(Self::new(&code, name, req.description, req.tags))
    }
}

/// Permitted mutations of an existing club
///
/// `None` leaves a field untouched. `tags: Some(..)` replaces the whole
/// association set, so `Some(empty)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<BTreeSet<String>>,
}

impl ClubPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.tags.is_none()
    }
}

impl From<ClubPatchRequest> for ClubPatch {
    fn from(req: ClubPatchRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            tags: req.tags.map(normalize_tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags_case_folds_and_dedups() {
        let tags = normalize_tags(["A", "a", "B"]);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("a"));
        assert!(tags.contains("b"));
    }

    #[test]
    fn test_normalize_tags_drops_blank_names() {
        let tags = normalize_tags(["  ", "", " Tech "]);
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["tech".to_string()]);
    }

    #[test]
    fn test_new_club_lowercases_code_and_defaults_description() {
        let club = NewClub::new("ABC", "ABC Club", None, None);
        assert_eq!(club.code, "abc");
        assert_eq!(club.name, "ABC Club");
        assert_eq!(club.description, "");
        assert!(club.tags.is_empty());
    }

    #[test]
    fn test_from_request_requires_code_and_name() {
        let req = CreateClubRequest {
            code: Some("abc".to_string()),
            ..Default::default()
        };
        let err = NewClub::from_request(req).unwrap_err();
        assert!(matches!(err, RequestError::MissingField { field: "name" }));
    }

    #[test]
    fn test_patch_from_request_normalizes_tags() {
        let patch = ClubPatch::from(ClubPatchRequest {
            name: None,
            description: Some("new".to_string()),
            tags: Some(vec!["X".to_string(), "x".to_string()]),
        });
        assert_eq!(patch.description.as_deref(), Some("new"));
        assert_eq!(patch.tags.unwrap().len(), 1);
        assert!(ClubPatch::default().tags.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ClubPatch::default().is_empty());
        assert!(!ClubPatch { name: Some("n".into()), ..Default::default() }.is_empty());
    }
}
