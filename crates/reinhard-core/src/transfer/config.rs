//! Tunable behaviour of the transfer engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Source channels whose standard deviation falls at or below this have no spread.
///
/// Centering a constant channel leaves floating-point residue around 1e-16,
/// while any real 8-bit variation produces spreads many orders larger. Gray
/// images hit this on both chromatic axes.
pub const DEFAULT_DEGENERATE_THRESHOLD: f64 = 1e-10;

/// How real-valued RGB is turned back into 8-bit samples after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantization {
    /// Drop the fractional part. Keeps output identical to the published
    /// algorithm, at the cost of a downward bias of half a code value on average.
    #[default]
    Truncate,
    /// Round to the nearest code value.
    Round,
}

impl Quantization {
    /// Quantize a value already clamped to `[0, 255]`.
    pub fn apply(self, value: f64) -> u8 {
        match self {
            Self::Truncate => value as u8,
            Self::Round => value.round() as u8,
        }
    }
}

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Round => write!(f, "round"),
        }
    }
}

/// Error returned when parsing an unknown quantization name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quantization mode '{0}' (expected 'truncate' or 'round')")]
pub struct ParseQuantizationError(String);

impl FromStr for Quantization {
    type Err = ParseQuantizationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" | "trunc" => Ok(Self::Truncate),
            "round" => Ok(Self::Round),
            _ => Err(ParseQuantizationError(s.to_string())),
        }
    }
}

/// Configuration for [`TransferEngine`](super::TransferEngine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Output quantization.
    pub quantization: Quantization,
    /// Largest source standard deviation still treated as zero spread.
    pub degenerate_threshold: f64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            quantization: Quantization::Truncate,
            degenerate_threshold: DEFAULT_DEGENERATE_THRESHOLD,
        }
    }
}

impl TransferConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
