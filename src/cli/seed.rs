use std::path::Path;

use serde::Deserialize;

use crate::app_data::AppData;
use crate::config::DatabaseHandle;
use crate::errors::InternalError;
use crate::types::internal::NewClub;

#[derive(Debug, thiserror::Error)]
pub enum SeedFileError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path} is not a JSON array of clubs: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One club entry of a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedClub {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

pub fn load_seed_file(path: &Path) -> Result<Vec<SeedClub>, SeedFileError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedFileError::Read {
        path: display.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedFileError::Parse {
        path: display,
        source,
    })
}

/// Insert `clubs` in a single transaction
///
/// A club whose code or name is already taken is skipped, so the command can
/// be rerun against a populated database.
pub async fn seed_clubs(app_data: &AppData, clubs: Vec<SeedClub>) -> Result<SeedReport, InternalError> {
    let txn = app_data.database.begin().await?;
    let mut report = SeedReport::default();

    for entry in clubs {
        let new_club = NewClub::new(&entry.code, entry.name, entry.description, entry.tags);
        let exists = app_data
            .club_store
            .find_club(&txn, Some(&new_club.code), Some(&new_club.name))
            .await?
            .is_some();
        if exists {
            tracing::debug!(club = %new_club.code, "Seed club already present, skipping");
            report.skipped += 1;
            continue;
        }

        let created = app_data.club_store.create_club(&txn, new_club).await?;
        tracing::info!(club = %created.code, "Seeded club {}", created.name);
        report.created += 1;
    }

    DatabaseHandle::commit(txn).await?;
    Ok(report)
}
