use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Password incorrect")]
    IncorrectPassword,
    #[error("Email not found: {email}")]
    UnknownEmail { email: String },
}
