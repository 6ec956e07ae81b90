//! Error types for color transfer.

/// Result alias for reinhard-core operations.
pub type Result<T> = std::result::Result<T, TransferError>;

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Pixel buffer does not describe a 3-channel image of the stated size.
    #[error("invalid image shape: {reason}")]
    Shape { reason: String },

    /// An image with zero pixels was handed to the pipeline.
    #[error("{role} image has no pixels")]
    Empty { role: &'static str },

    /// The source has no spread on any channel, so no rescale ratio is defined.
    #[error("source image has degenerate variance on every channel (std = {std:?})")]
    DegenerateVariance { std: [f64; 3] },

    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A non-finite value escaped one of the conversion stages.
    #[error("numeric overflow during {stage}")]
    NumericOverflow { stage: &'static str },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl TransferError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }

    /// Whether this error describes a malformed or empty input image.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape { .. } | Self::Empty { .. })
    }
}
