//! Image decoding and encoding around the transfer core.

use std::path::Path;

use reinhard_core::TransferImage;

use crate::error::CliError;

/// Load an image from disk as 8-bit RGB.
///
/// Any format the `image` crate understands is accepted. Alpha is dropped,
/// grayscale is expanded and higher bit depths are reduced to 8 bits, so the
/// core always receives RGB channel order.
pub fn load_image(path: &Path) -> Result<TransferImage, CliError> {
    let img = image::open(path).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    if img.color().has_alpha() {
        tracing::debug!("{}: discarding alpha channel", path.display());
    }
    let rgb = img.to_rgb8();
    tracing::info!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        rgb.width(),
        rgb.height(),
        img.color()
    );
    Ok(TransferImage::from(rgb))
}

/// Encode an image to disk. The format follows the file extension.
pub fn save_image(path: &Path, image: TransferImage) -> Result<(), CliError> {
    let (width, height) = image.dimensions();
    let buffer = image::RgbImage::try_from(image)?;
    buffer.save(path).map_err(|source| CliError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {} ({width}x{height})", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("reinhard-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_png_roundtrip() {
        let path = temp_path("roundtrip.png");
        let image = TransferImage::from_fn(5, 4, |x, y| [x as u8 * 40, y as u8 * 60, 200]);
        save_image(&path, image.clone()).unwrap();
        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_rgba_input_is_reduced_to_rgb() {
        let path = temp_path("rgba.png");
        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 40]));
        rgba.save(&path).unwrap();
        let loaded = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.pixels, vec![[10, 20, 30]; 4]);
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = load_image(Path::new("/nonexistent/reinhard.png")).unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
    }
}
