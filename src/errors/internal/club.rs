use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClubError {
    #[error("A club with code '{code}' or name '{name}' already exists")]
    Duplicate { code: String, name: String },

    #[error("Club name '{name}' is already taken")]
    NameConflict { name: String },

    /// The (code, name) pair does not identify a stored club
    #[error("Invalid club code/name pair: ({code}, {name})")]
    Mismatch { code: String, name: String },

    #[error("Club not found")]
    NotFound,

    #[error("Unknown club code: {code}")]
    UnknownCode { code: String },
}
