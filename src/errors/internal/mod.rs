use thiserror::Error;

pub mod club;
pub mod database;
pub mod login;
pub mod request;
pub mod session;
pub mod tag;
pub mod user;

pub use club::ClubError;
pub use database::DatabaseError;
pub use login::LoginError;
pub use request::RequestError;
pub use session::SessionError;
pub use tag::TagError;
pub use user::UserError;

/// Internal error type for store, provider and coordinator operations
///
/// Infrastructure errors (database, crypto) are shared; domain errors are
/// grouped per entity. Not exposed via API - endpoints convert through
/// `ApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Club(#[from] ClubError),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn transaction_begin(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::TransactionBegin { source })
    }

    pub fn transaction_commit(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::TransactionCommit { source })
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> InternalError {
        InternalError::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
