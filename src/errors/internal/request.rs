use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("At least one of {fields} is required")]
    MissingOneOf { fields: &'static str },
}

impl RequestError {
    /// Unwrap a required payload field or fail with `MissingField`
    pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, RequestError> {
        value.ok_or(RequestError::MissingField { field })
    }
}
