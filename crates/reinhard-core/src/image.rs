//! 8-bit RGB image representation at the pipeline boundary.

use glam::DVec3;

use crate::error::{Result, TransferError};

/// Number of interleaved channels every image carries.
pub const CHANNELS: usize = 3;

/// An 8-bit RGB image, stored row-major with interleaved R, G, B samples.
///
/// Channel order is always RGB. Callers decoding BGR sources must swap
/// channels before building one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data, `width * height` entries in row-major order.
    pub pixels: Vec<[u8; 3]>,
}

impl TransferImage {
    /// Build an image from a pixel vector, checking it matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TransferError::shape(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from an interleaved byte buffer with `channels` samples per pixel.
    ///
    /// Only 3-channel buffers are accepted; alpha or grayscale data must be
    /// converted by the caller.
    pub fn from_raw(width: u32, height: u32, channels: usize, bytes: &[u8]) -> Result<Self> {
        if channels != CHANNELS {
            return Err(TransferError::shape(format!(
                "expected {CHANNELS} channels, got {channels}"
            )));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if bytes.len() != expected {
            return Err(TransferError::shape(format!(
                "{width}x{height}x{CHANNELS} buffer needs {expected} bytes, got {}",
                bytes.len()
            )));
        }
        let pixels: &[[u8; 3]] = bytemuck::try_cast_slice(bytes)
            .map_err(|e| TransferError::shape(format!("cannot view buffer as RGB triplets: {e}")))?;
        Self::new(width, height, pixels.to_vec())
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// `(width, height)` of the image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Interleaved RGB bytes, borrowed without copying.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the image and return its interleaved RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Flatten to real-valued pixel vectors on the 0–255 scale.
    pub fn to_vectors(&self) -> Vec<DVec3> {
        self.pixels
            .iter()
            .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            .collect()
    }
}

impl From<::image::RgbImage> for TransferImage {
    fn from(img: ::image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl TryFrom<TransferImage> for ::image::RgbImage {
    type Error = TransferError;

    fn try_from(img: TransferImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        ::image::RgbImage::from_raw(width, height, img.into_raw()).ok_or_else(|| {
            TransferError::shape(format!("pixel buffer too small for {width}x{height}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_pixel_count() {
        let err = TransferImage::new(2, 2, vec![[0, 0, 0]; 3]).unwrap_err();
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_from_raw_rejects_four_channels() {
        let bytes = vec![0u8; 2 * 2 * 4];
        let err = TransferImage::from_raw(2, 2, 4, &bytes).unwrap_err();
        assert!(matches!(err, TransferError::Shape { .. }));
    }

    #[test]
    fn test_from_raw_rejects_short_buffer() {
        let bytes = vec![0u8; 11];
        assert!(TransferImage::from_raw(2, 2, 3, &bytes).is_err());
    }

    #[test]
    fn test_from_raw_keeps_row_major_order() {
        let bytes: Vec<u8> = (0..12).collect();
        let img = TransferImage::from_raw(2, 2, 3, &bytes).unwrap();
        assert_eq!(img.pixels[0], [0, 1, 2]);
        assert_eq!(img.pixels[1], [3, 4, 5]);
        assert_eq!(img.pixels[3], [9, 10, 11]);
        assert_eq!(img.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn test_from_fn_indexes_by_row() {
        let img = TransferImage::from_fn(3, 2, |x, y| [x as u8, y as u8, 0]);
        assert_eq!(img.pixel_count(), 6);
        assert_eq!(img.pixels[4], [1, 1, 0]);
    }

    #[test]
    fn test_image_crate_conversion_preserves_pixels() {
        let img = TransferImage::from_fn(4, 3, |x, y| [x as u8 * 10, y as u8 * 20, 7]);
        let buffer = ::image::RgbImage::try_from(img.clone()).unwrap();
        assert_eq!(buffer.get_pixel(2, 1).0, [20, 20, 7]);
        assert_eq!(TransferImage::from(buffer), img);
    }

    #[test]
    fn test_to_vectors_uses_byte_scale() {
        let img = TransferImage::new(1, 1, vec![[0, 128, 255]]).unwrap();
        assert_eq!(img.to_vectors(), vec![DVec3::new(0.0, 128.0, 255.0)]);
    }
}
