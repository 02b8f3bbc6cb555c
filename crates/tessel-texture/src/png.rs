//! Deterministic PNG writer.
//!
//! Fixed compression and filter settings keep the encoded bytes identical
//! for identical pixels.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::image::buffer_len;
use crate::tga::to_byte;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files, slower to encode.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

fn color_type(channels: u32) -> Result<ColorType, PngError> {
    match channels {
        1 => Ok(ColorType::Grayscale),
        2 => Ok(ColorType::GrayscaleAlpha),
        3 => Ok(ColorType::Rgb),
        4 => Ok(ColorType::Rgba),
        other => Err(PngError::InvalidDimensions(format!(
            "PNG supports 1 to 4 channels, got {}",
            other
        ))),
    }
}

/// Writes interleaved float pixels with 1 to 4 channels as an 8-bit PNG stream.
pub fn write_pixels_to_writer<W: Write>(
    writer: W,
    pixels: &[f32],
    width: u32,
    height: u32,
    channels: u32,
    config: &PngConfig,
) -> Result<(), PngError> {
    let color = color_type(channels)?;
    let expected = buffer_len(width, height, channels).ok_or_else(|| {
        PngError::InvalidDimensions(format!("{}x{} overflows the buffer size", width, height))
    })?;
    if pixels.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} values for {}x{} {:?}, got {}",
            expected,
            width,
            height,
            color,
            pixels.len()
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    let data: Vec<u8> = pixels.iter().map(|&v| to_byte(v)).collect();
    png_writer.write_image_data(&data)?;

    Ok(())
}

/// Writes a PNG file.
pub fn save_png(
    path: &Path,
    pixels: &[f32],
    width: u32,
    height: u32,
    channels: u32,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_pixels_to_writer(writer, pixels, width, height, channels, config)
}
