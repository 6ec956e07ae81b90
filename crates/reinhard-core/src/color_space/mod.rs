//! Color space conversion between device RGB and the decorrelated lαβ space.

pub mod lab;

pub use lab::{forward, inverse, lab_to_rgb, rgb_to_lab};
