// Test utilities shared by the unit tests
// Only compiled when running tests

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::app_data::AppData;
use crate::config::Settings;
use crate::providers::ManualClock;

pub const TEST_PEPPER: &str = "test-pepper-for-unit-tests";

/// Fixed instant the manual clock starts at
pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// AppData over a migrated in-memory database with a manual clock
///
/// Returns the clock separately so tests can move time forward.
pub async fn setup_test_app() -> (Arc<AppData>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(test_start()));
    let settings = Settings::with_defaults("sqlite::memory:", TEST_PEPPER);

    let app_data = AppData::init(settings, clock.clone())
        .await
        .expect("Failed to initialize test AppData");
    app_data
        .database
        .migrate()
        .await
        .expect("Failed to run migrations");

    (Arc::new(app_data), clock)
}
