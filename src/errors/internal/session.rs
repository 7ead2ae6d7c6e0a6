use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session token is missing")]
    MissingToken,

    #[error("Session token is not recognised")]
    InvalidToken,

    #[error("Session has expired")]
    Expired,
}
