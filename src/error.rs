// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Settings sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting parsed but holds an unusable value
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

/// Rejection of a picked or dropped file. The display text is what the
/// blocking alert shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please upload a valid model file (.pkl or .joblib)")]
    InvalidModel { name: String },

    #[error("Please upload a valid CSV file")]
    InvalidDataset { name: String },

    #[error("Unsupported file \"{name}\". Drop a .pkl or .joblib model, or a .csv dataset")]
    Unrecognized { name: String },
}

impl UploadError {
    pub fn file_name(&self) -> &str {
        match self {
            UploadError::InvalidModel { name }
            | UploadError::InvalidDataset { name }
            | UploadError::Unrecognized { name } => name,
        }
    }
}
