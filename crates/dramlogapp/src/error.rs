use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DramlogError {
    // Validation errors: user-fixable, always reported before any mutation.
    #[error("All fields are required: name, strength and volume")]
    MissingField,

    #[error("Strength must be a number between 0 and 100 percent")]
    StrengthOutOfRange,

    #[error("Volume must be a number of at least 1 ml")]
    VolumeInvalid,

    // Storage failures: environment-level, recoverable by freeing space or
    // changing where the data directory lives.
    #[error("Storage quota exceeded; delete old entries to free space")]
    QuotaExceeded,

    #[error("Storage is unavailable: {0}")]
    StorageUnavailable(std::io::Error),

    #[error("Drink not found: {0}")]
    NotFound(Uuid),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, DramlogError>;
