//! Transfer engine — matches lαβ statistics of a source image to a target.

pub mod config;
pub mod engine;

pub use config::{Quantization, TransferConfig};
pub use engine::{TransferEngine, TransferReport, transfer};
