use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid date `{0}`")]
    InvalidDate(String),
    #[error("invalid record payload: {0}")]
    Records(String),
}

impl LayoutError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
