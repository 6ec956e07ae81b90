//! Per-channel population statistics over flat pixel sequences.
//!
//! Centering is a separate, explicit step: [`std`] computes the root mean
//! square of whatever it is given, so callers subtract the [`mean`] first
//! (see [`center`] and [`ChannelStats::measure`]).

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransferError};

/// Mean and population standard deviation of each channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: DVec3,
    pub std: DVec3,
}

impl ChannelStats {
    /// Measure `pixels`, returning the statistics and the mean-subtracted pixels.
    pub fn measure(pixels: &[DVec3]) -> Result<(Self, Vec<DVec3>)> {
        let mean = mean(pixels)?;
        let centered = center(pixels, mean);
        let std = std(&centered)?;
        Ok((Self { mean, std }, centered))
    }
}

/// Per-channel arithmetic mean, summed left to right.
pub fn mean(pixels: &[DVec3]) -> Result<DVec3> {
    if pixels.is_empty() {
        return Err(TransferError::InvalidInput("mean of zero pixels"));
    }
    let sum = pixels.iter().fold(DVec3::ZERO, |acc, &px| acc + px);
    Ok(sum / pixels.len() as f64)
}

/// Per-channel root mean square with divisor N.
///
/// Equals the population standard deviation only when `centered` has zero mean.
pub fn std(centered: &[DVec3]) -> Result<DVec3> {
    if centered.is_empty() {
        return Err(TransferError::InvalidInput("standard deviation of zero pixels"));
    }
    let sum_sq = centered.iter().fold(DVec3::ZERO, |acc, &px| acc + px * px);
    let variance = sum_sq / centered.len() as f64;
    Ok(DVec3::new(variance.x.sqrt(), variance.y.sqrt(), variance.z.sqrt()))
}

/// Subtract `mean` from every pixel.
pub fn center(pixels: &[DVec3], mean: DVec3) -> Vec<DVec3> {
    pixels.iter().map(|&px| px - mean).collect()
}
