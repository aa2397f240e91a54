use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackwrightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown build mode: {0} (expected \"development\" or \"production\")")]
    UnknownMode(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("check failed: {message}")]
    Check { message: String },

    #[error("{0}")]
    #[allow(dead_code)] // Generic error variant for future use
    Other(String),
}

impl PackwrightError {
    /// Create a check error naming the missing or inconsistent resources
    pub fn check(message: String) -> Self {
        Self::Check { message }
    }

    pub fn unknown_mode(value: &str) -> Self {
        Self::UnknownMode(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PackwrightError>;

impl From<anyhow::Error> for PackwrightError {
    fn from(err: anyhow::Error) -> Self {
        PackwrightError::check(err.to_string())
    }
}
