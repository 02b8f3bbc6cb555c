//! Uncompressed true-color TGA files.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// Size of the fixed TGA header in bytes.
pub const TGA_HEADER_SIZE: usize = 18;

/// Image type for uncompressed true-color data.
const TRUE_COLOR: u8 = 2;

/// Descriptor bit marking a top-left origin.
const TOP_LEFT: u8 = 0x20;

/// Errors from TGA operations.
#[derive(Debug, Error)]
pub enum TgaError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported channel count {0}, TGA output needs 3 or 4")]
    UnsupportedChannels(u32),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Unsupported TGA image type {image_type} with {bits_per_pixel} bits per pixel")]
    UnsupportedFormat { image_type: u8, bits_per_pixel: u8 },
}

/// The fields of the 18-byte header this module reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    pub image_type: u8,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    /// Header for a top-left origin true-color image.
    pub fn true_color(width: u16, height: u16, channels: u8) -> Self {
        let bits_per_pixel = channels * 8;
        let alpha_bits = if bits_per_pixel == 32 { 8 } else { 0 };
        Self {
            image_type: TRUE_COLOR,
            width,
            height,
            bits_per_pixel,
            descriptor: TOP_LEFT | alpha_bits,
        }
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // ID length, color map type
        writer.write_u8(0)?;
        writer.write_u8(0)?;
        writer.write_u8(self.image_type)?;
        // Color map origin, length, depth
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u8(0)?;
        // X and Y origin
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u16::<LittleEndian>(self.width)?;
        writer.write_u16::<LittleEndian>(self.height)?;
        writer.write_u8(self.bits_per_pixel)?;
        writer.write_u8(self.descriptor)?;
        Ok(())
    }

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let id_length = reader.read_u8()?;
        let _color_map_type = reader.read_u8()?;
        let image_type = reader.read_u8()?;
        let mut color_map = [0u8; 5];
        reader.read_exact(&mut color_map)?;
        let _x_origin = reader.read_u16::<LittleEndian>()?;
        let _y_origin = reader.read_u16::<LittleEndian>()?;
        let width = reader.read_u16::<LittleEndian>()?;
        let height = reader.read_u16::<LittleEndian>()?;
        let bits_per_pixel = reader.read_u8()?;
        let descriptor = reader.read_u8()?;
        // Skip the optional image ID.
        io::copy(&mut reader.take(u64::from(id_length)), &mut io::sink())?;
        Ok(Self {
            image_type,
            width,
            height,
            bits_per_pixel,
            descriptor,
        })
    }
}

/// Quantizes `[0, 1]` to a byte, rounding half up. Out-of-range values clamp.
#[inline]
pub fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

#[inline]
fn from_byte(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Writes `pixels` (interleaved RGB or RGBA floats) as a TGA stream.
pub fn write_tga<W: Write>(
    writer: &mut W,
    pixels: &[f32],
    width: u32,
    height: u32,
    channels: u32,
) -> Result<(), TgaError> {
    if channels != 3 && channels != 4 {
        return Err(TgaError::UnsupportedChannels(channels));
    }
    let (w, h) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(TgaError::InvalidDimensions(format!(
                "{}x{} exceeds the 65535 pixel TGA limit",
                width, height
            )))
        }
    };
    let expected = usize::from(w) * usize::from(h) * channels as usize;
    if pixels.len() != expected {
        return Err(TgaError::InvalidDimensions(format!(
            "expected {} values for {}x{}x{}, got {}",
            expected,
            width,
            height,
            channels,
            pixels.len()
        )));
    }

    TgaHeader::true_color(w, h, channels as u8).write(writer)?;
    for pixel in pixels.chunks_exact(channels as usize) {
        writer.write_all(&[to_byte(pixel[2]), to_byte(pixel[1]), to_byte(pixel[0])])?;
        if channels == 4 {
            writer.write_u8(to_byte(pixel[3]))?;
        }
    }
    Ok(())
}

/// Writes a TGA file.
pub fn save_tga(
    path: &Path,
    pixels: &[f32],
    width: u32,
    height: u32,
    channels: u32,
) -> Result<(), TgaError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_tga(&mut writer, pixels, width, height, channels)?;
    writer.flush()?;
    Ok(())
}

/// A decoded TGA image as RGBA floats in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TgaImage {
    pub width: u32,
    pub height: u32,
    /// Channels stored in the file: 3 or 4.
    pub source_channels: u32,
    pub pixels: Vec<f32>,
}

/// Reads an uncompressed 24- or 32-bit TGA stream. 24-bit data gets alpha 1.
pub fn read_tga<R: Read>(reader: &mut R) -> Result<TgaImage, TgaError> {
    let header = TgaHeader::read(reader)?;
    if header.image_type != TRUE_COLOR || !matches!(header.bits_per_pixel, 24 | 32) {
        return Err(TgaError::UnsupportedFormat {
            image_type: header.image_type,
            bits_per_pixel: header.bits_per_pixel,
        });
    }

    let channels = usize::from(header.bits_per_pixel / 8);
    let count = usize::from(header.width) * usize::from(header.height);
    let mut bytes = vec![0u8; count * channels];
    reader.read_exact(&mut bytes)?;

    let mut pixels = Vec::with_capacity(count * 4);
    for texel in bytes.chunks_exact(channels) {
        let alpha = if channels == 4 { from_byte(texel[3]) } else { 1.0 };
        pixels.extend_from_slice(&[from_byte(texel[2]), from_byte(texel[1]), from_byte(texel[0]), alpha]);
    }

    Ok(TgaImage {
        width: u32::from(header.width),
        height: u32::from(header.height),
        source_channels: channels as u32,
        pixels,
    })
}

/// Reads a TGA file.
pub fn load_tga(path: &Path) -> Result<TgaImage, TgaError> {
    let file = std::fs::File::open(path)?;
    read_tga(&mut BufReader::new(file))
}
