use thiserror::Error;

use crate::storage::StorageError;

pub type Result<T> = std::result::Result<T, ReplyError>;

/// Everything a reply request can fail with. None of these are retried.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unsupported platform '{platform}', expected one of: {}", .supported.join(", "))]
    UnsupportedPlatform {
        platform: String,
        supported: Vec<String>,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ReplyError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::UnsupportedPlatform { .. } => "unsupported_platform",
            Self::Storage(_) => "storage_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_lists_the_supported_set() {
        let err = ReplyError::UnsupportedPlatform {
            platform: "myspace".to_string(),
            supported: vec!["twitter".to_string(), "reddit".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unsupported platform 'myspace', expected one of: twitter, reddit"
        );
        assert_eq!(err.code(), "unsupported_platform");
    }
}
