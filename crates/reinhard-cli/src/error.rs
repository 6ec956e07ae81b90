//! Errors surfaced by the command-line front end.

use std::path::PathBuf;

use reinhard_core::TransferError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid {var}: {reason}")]
    Env { var: &'static str, reason: String },
    #[error(transparent)]
    Report(#[from] serde_json::Error),
    #[error(transparent)]
    Transfer(#[from] TransferError),
}
