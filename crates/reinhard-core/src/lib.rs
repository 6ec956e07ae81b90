//! Reinhard Core — statistical color transfer between images.
//!
//! Recolors a source image so that the per-channel mean and standard
//! deviation of its pixels in the decorrelated lαβ space match those of a
//! target image. Pure in-memory computation; decoding, encoding and display
//! belong to the caller.
//!
//! ```
//! use reinhard_core::{TransferImage, transfer};
//!
//! let source = TransferImage::from_fn(8, 8, |x, y| [(x * 30) as u8, (y * 30) as u8, 90]);
//! let target = TransferImage::from_fn(4, 4, |x, y| [200, (x * 50) as u8, (y * 40) as u8]);
//! let recolored = transfer(&source, &target)?;
//! assert_eq!(recolored.dimensions(), (8, 8));
//! # Ok::<(), reinhard_core::TransferError>(())
//! ```

pub mod color_space;
pub mod error;
pub mod image;
pub mod stats;
pub mod transfer;

// Re-exports for convenience.
pub use error::{Result, TransferError};
pub use image::TransferImage;
pub use stats::ChannelStats;
pub use transfer::{Quantization, TransferConfig, TransferEngine, TransferReport, transfer};
