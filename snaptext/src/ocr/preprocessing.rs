use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::config::OcrConfig;
use crate::error::{Result, SnaptextError};

/// Normalize an accepted upload into engine-ready bytes.
///
/// Decodes the image (guessing the container from content), rejects
/// anything below the minimum dimension, downscales anything above the
/// maximum while keeping the aspect ratio, converts to grayscale, and
/// re-encodes as PNG. Failures here surface as [`SnaptextError::ImageDecode`]:
/// the upload looked like an image but could not be processed as one.
pub fn prepare_image(bytes: &[u8], config: &OcrConfig) -> Result<Vec<u8>> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SnaptextError::ImageDecode(format!("Failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| SnaptextError::ImageDecode(format!("Failed to decode image: {e}")))?;

    let (width, height) = img.dimensions();
    if width < config.min_image_dimension || height < config.min_image_dimension {
        return Err(SnaptextError::ImageDecode(format!(
            "Image too small: {}x{}, minimum {}x{}",
            width, height, config.min_image_dimension, config.min_image_dimension
        )));
    }

    let img = downscale_if_needed(img, config.max_image_dimension);

    // Grayscale helps OCR accuracy and drops any alpha channel.
    let img = DynamicImage::ImageLuma8(img.to_luma8());

    let mut output = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| SnaptextError::ImageDecode(format!("Failed to encode image: {e}")))?;

    Ok(output)
}

fn downscale_if_needed(img: DynamicImage, max_dim: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= max_dim && height <= max_dim {
        return img;
    }

    let ratio = if width > height {
        max_dim as f32 / width as f32
    } else {
        max_dim as f32 / height as f32
    };
    let new_width = (width as f32 * ratio) as u32;
    let new_height = (height as f32 * ratio) as u32;

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}
