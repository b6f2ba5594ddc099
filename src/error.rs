use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} is not a valid resource name")]
    InvalidPath(String),
}
