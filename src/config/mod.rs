mod database;
mod env_provider;
mod errors;
mod logging;
mod settings;

pub use database::DatabaseHandle;
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::ConfigError;
pub use logging::{LoggingConfig, LoggingError, init_logging};
pub use settings::Settings;
