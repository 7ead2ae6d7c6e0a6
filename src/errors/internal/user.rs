use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("A user with email '{email}' or username '{username}' already exists")]
    Duplicate { email: String, username: String },

    #[error("User not found")]
    NotFound,
}
