use thiserror::Error;

use crate::crc::CrcError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error composing checksums")]
    Crc(#[from] CrcError),

    #[error("Error reading block manifest")]
    Io(#[from] std::io::Error),

    #[error("Error decoding block manifest")]
    Manifest(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Block manifest contains no blocks")]
    EmptyManifest,
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
