use thiserror::Error;

/// Startup configuration failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required setting '{name}' is missing")]
    Missing { name: &'static str },

    #[error("Invalid setting '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}
