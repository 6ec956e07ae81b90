//! Statistical color transfer between two images.
//!
//! The source image is moved into lαβ space, recentered and rescaled per
//! channel so its mean and standard deviation match the target's, and then
//! brought back to 8-bit RGB. Spatial structure of the source is untouched;
//! the target only contributes its six statistics, so the two images may
//! have different sizes.
//!
//! # Algorithm
//! 1. Convert both images to lαβ
//! 2. Measure mean and standard deviation per channel (center, then RMS)
//! 3. `new = (src − src_mean) · (tgt_std / src_std) + tgt_mean`
//! 4. Convert back to RGB, clamp to `[0, 255]` and quantize

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::config::TransferConfig;
use crate::color_space;
use crate::error::{Result, TransferError};
use crate::image::TransferImage;
use crate::stats::ChannelStats;

/// Statistics gathered during one transfer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferReport {
    /// lαβ statistics of the source image.
    pub source: ChannelStats,
    /// lαβ statistics of the target image.
    pub target: ChannelStats,
    /// Per-channel `tgt_std / src_std`, 0 on channels without source spread.
    pub scale: DVec3,
    /// Channel values that fell outside `[0, 255]` and were saturated.
    pub clamped_values: usize,
}

/// Runs color transfers with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct TransferEngine {
    config: TransferConfig,
}

impl TransferEngine {
    pub fn new(config: TransferConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    /// Recolor `source` so its lαβ statistics match `target`.
    pub fn transfer(&self, source: &TransferImage, target: &TransferImage) -> Result<TransferImage> {
        self.transfer_with_report(source, target)
            .map(|(image, _)| image)
    }

    /// Like [`transfer`](Self::transfer), also returning the measured statistics.
    pub fn transfer_with_report(
        &self,
        source: &TransferImage,
        target: &TransferImage,
    ) -> Result<(TransferImage, TransferReport)> {
        validate(source, "source")?;
        validate(target, "target")?;

        let src_lab = color_space::forward(&source.to_vectors());
        let tgt_lab = color_space::forward(&target.to_vectors());

        let (src_stats, src_centered) = ChannelStats::measure(&src_lab)?;
        let (tgt_stats, _) = ChannelStats::measure(&tgt_lab)?;
        ensure_finite(&src_stats)?;
        ensure_finite(&tgt_stats)?;

        let scale = rescale_factors(&src_stats, &tgt_stats, self.config.degenerate_threshold)?;
        tracing::debug!(
            "transfer {}x{} <- {}x{}: src mean {} std {}, tgt mean {} std {}, scale {}",
            source.width,
            source.height,
            target.width,
            target.height,
            src_stats.mean,
            src_stats.std,
            tgt_stats.mean,
            tgt_stats.std,
            scale
        );

        let matched: Vec<DVec3> = src_centered
            .iter()
            .map(|&px| px * scale + tgt_stats.mean)
            .collect();
        let rgb = color_space::inverse(&matched);

        let mut clamped_values = 0;
        let pixels: Vec<[u8; 3]> = rgb
            .iter()
            .map(|px| {
                let mut out = [0u8; 3];
                for (c, value) in px.to_array().into_iter().enumerate() {
                    let (saturated, clamped) = saturate(value);
                    clamped_values += usize::from(clamped);
                    out[c] = self.config.quantization.apply(saturated);
                }
                out
            })
            .collect();

        if clamped_values > 0 {
            tracing::debug!("saturated {clamped_values} of {} channel values", rgb.len() * 3);
        }

        let image = TransferImage {
            width: source.width,
            height: source.height,
            pixels,
        };
        let report = TransferReport {
            source: src_stats,
            target: tgt_stats,
            scale,
            clamped_values,
        };
        Ok((image, report))
    }
}

/// Transfer with the default configuration (truncating quantization).
pub fn transfer(source: &TransferImage, target: &TransferImage) -> Result<TransferImage> {
    TransferEngine::default().transfer(source, target)
}

fn validate(image: &TransferImage, role: &'static str) -> Result<()> {
    if image.width == 0 || image.height == 0 || image.is_empty() {
        return Err(TransferError::Empty { role });
    }
    let expected = image.width as usize * image.height as usize;
    if image.pixel_count() != expected {
        return Err(TransferError::shape(format!(
            "{role} is {}x{} but holds {} pixels",
            image.width,
            image.height,
            image.pixel_count()
        )));
    }
    Ok(())
}

fn ensure_finite(stats: &ChannelStats) -> Result<()> {
    if stats.mean.is_finite() && stats.std.is_finite() {
        Ok(())
    } else {
        Err(TransferError::NumericOverflow {
            stage: "forward conversion",
        })
    }
}

/// Per-channel `tgt_std / src_std`.
///
/// A channel without source spread carries no structure, so its factor is 0
/// and every pixel lands on the target mean. A source without spread on any
/// channel is rejected.
fn rescale_factors(src: &ChannelStats, tgt: &ChannelStats, threshold: f64) -> Result<DVec3> {
    let flat = src.std.cmple(DVec3::splat(threshold));
    if flat.all() {
        return Err(TransferError::DegenerateVariance {
            std: src.std.to_array(),
        });
    }
    if flat.any() {
        tracing::warn!(
            "source has no spread on channels {:?}; pinning them to the target mean",
            flat
        );
    }
    Ok(DVec3::select(flat, DVec3::ZERO, tgt.std / src.std))
}

/// Clamp to `[0, 255]`, reporting whether the value had to move. NaN maps to 0.
fn saturate(value: f64) -> (f64, bool) {
    if value.is_nan() || value < 0.0 {
        (0.0, true)
    } else if value > 255.0 {
        (255.0, true)
    } else {
        (value, false)
    }
}
