use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] poky_core::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Connection pool is closed")]
    PoolClosed,

    #[error("Invalid pool settings: {0}")]
    InvalidPoolSettings(String),

    #[error("Backend call failed: {0}")]
    Backend(String),
}

impl Error {
    /// Returns a stable error code for this error variant.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Core(e) => e.code(),
            Error::Pool(_) => "POOL_ERROR",
            Error::PoolClosed => "POOL_CLOSED",
            Error::InvalidPoolSettings(_) => "INVALID_POOL_SETTINGS",
            Error::Backend(_) => "BACKEND_CALL_FAILED",
        }
    }

    /// True for failures of a single backend statement, as opposed to
    /// structural or pool-level errors. These are the errors the lenient
    /// store methods recover from.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Error::Backend(_) | Error::Core(poky_core::Error::UnexpectedResult(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::PoolClosed.code(), "POOL_CLOSED");
        assert_eq!(Error::Backend("boom".to_string()).code(), "BACKEND_CALL_FAILED");
        assert_eq!(
            Error::InvalidPoolSettings("min > max".to_string()).code(),
            "INVALID_POOL_SETTINGS"
        );
        assert_eq!(
            Error::Core(poky_core::Error::InvalidBucketName("2x".to_string())).code(),
            "INVALID_BUCKET_NAME"
        );
    }

    #[test]
    fn test_backend_failure_classification() {
        assert!(Error::Backend("boom".to_string()).is_backend_failure());
        assert!(
            Error::Core(poky_core::Error::UnexpectedResult("?".to_string()))
                .is_backend_failure()
        );
        assert!(!Error::PoolClosed.is_backend_failure());
        assert!(
            !Error::Core(poky_core::Error::InvalidBucketName("2x".to_string()))
                .is_backend_failure()
        );
    }
}
