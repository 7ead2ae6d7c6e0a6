use std::sync::Arc;

use crate::config::{DatabaseHandle, Settings};
use crate::errors::InternalError;
use crate::providers::{AuthenticationProvider, Clock, CryptoProvider, SessionProvider};
use crate::stores::{ClubStore, FavoriteStore, TagStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// Every store and provider is created once here and shared through
/// `Arc<AppData>` with the coordinators.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings, clock)
///   ├─ database (DatabaseHandle)
///   ├─ crypto_provider ─┬─ user_store ─┬─ session_provider
///   │                   │              └─ authentication_provider
///   ├─ tag_store ─ club_store
///   └─ favorite_store
/// ```
pub struct AppData {
    pub settings: Settings,
    pub database: DatabaseHandle,
    pub clock: Arc<dyn Clock>,
    pub crypto_provider: Arc<CryptoProvider>,
    pub tag_store: Arc<TagStore>,
    pub club_store: Arc<ClubStore>,
    pub favorite_store: Arc<FavoriteStore>,
    pub user_store: Arc<UserStore>,
    pub session_provider: Arc<SessionProvider>,
    pub authentication_provider: Arc<AuthenticationProvider>,
}

impl AppData {
    /// Connect to the database and build every store and provider
    ///
    /// Does not migrate; callers decide when the schema is brought up to date.
    pub async fn init(settings: Settings, clock: Arc<dyn Clock>) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");
        let database = DatabaseHandle::connect(&settings.database_url).await?;

        let crypto_provider = Arc::new(CryptoProvider::new(settings.password_pepper.clone()));

        tracing::debug!("Creating stores...");
        let tag_store = Arc::new(TagStore::new());
        let club_store = Arc::new(ClubStore::new(tag_store.clone()));
        let favorite_store = Arc::new(FavoriteStore::new());
        let user_store = Arc::new(UserStore::new(crypto_provider.clone()));

        let session_provider = Arc::new(SessionProvider::new(
            user_store.clone(),
            crypto_provider.clone(),
            clock.clone(),
            settings.session_ttl(),
        ));
        let authentication_provider = Arc::new(AuthenticationProvider::new(
            user_store.clone(),
            crypto_provider.clone(),
        ));

        tracing::info!("AppData initialized");

        Ok(Self {
            settings,
            database,
            clock,
            crypto_provider,
            tag_store,
            club_store,
            favorite_store,
            user_store,
            session_provider,
            authentication_provider,
        })
    }
}
