use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed connection string: {0}")]
    MalformedConnectionString(String),

    #[error("Invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("Unexpected backend result: {0}")]
    UnexpectedResult(String),
}

impl Error {
    /// Returns a stable error code for this error variant.
    /// These codes are stable and can be used by callers for classification.
    pub fn code(&self) -> &'static str {
        match self {
            Error::MalformedConnectionString(_) => "MALFORMED_CONNECTION_STRING",
            Error::InvalidBucketName(_) => "INVALID_BUCKET_NAME",
            Error::UnexpectedResult(_) => "UNEXPECTED_RESULT",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
