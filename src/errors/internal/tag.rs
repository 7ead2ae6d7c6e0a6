use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("Tag not found: {name}")]
    NotFound { name: String },
}
