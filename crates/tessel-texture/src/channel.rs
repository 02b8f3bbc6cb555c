//! Per-pixel channel layout conversion between images of equal size and
//! mip count.

use thiserror::Error;

use crate::image::{ImageData, ImageError};

/// Errors from channel conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{role} image has {actual} channels, expected {expected}")]
    ChannelCount {
        role: &'static str,
        expected: u32,
        actual: u32,
    },

    #[error("Mip level counts differ: source has {source_levels}, destination has {destination_levels}")]
    MipCount {
        source_levels: u32,
        destination_levels: u32,
    },

    #[error("Image sizes differ: source is {source_size:?}, destination is {destination_size:?}")]
    Size {
        source_size: (u32, u32),
        destination_size: (u32, u32),
    },

    #[error(transparent)]
    Image(#[from] ImageError),
}

fn expect_channels(role: &'static str, image: &ImageData, expected: u32) -> Result<(), ConversionError> {
    let actual = image.channel_count();
    if actual != expected {
        return Err(ConversionError::ChannelCount {
            role,
            expected,
            actual,
        });
    }
    Ok(())
}

fn convert<F>(source: &ImageData, destination: &mut ImageData, mut pixel: F) -> Result<(), ConversionError>
where
    F: FnMut(&[f32], &mut [f32]),
{
    if source.mip_level_count() != destination.mip_level_count() {
        return Err(ConversionError::MipCount {
            source_levels: source.mip_level_count(),
            destination_levels: destination.mip_level_count(),
        });
    }
    if source.dimensions(0) != destination.dimensions(0) {
        return Err(ConversionError::Size {
            source_size: source.dimensions(0),
            destination_size: destination.dimensions(0),
        });
    }

    let from = source.channel_count() as usize;
    let to = destination.channel_count() as usize;
    for level in 0..source.mip_level_count() {
        let input = source.pixels(level).chunks_exact(from);
        let output = destination.pixels_mut(level).chunks_exact_mut(to);
        for (src, dst) in input.zip(output) {
            pixel(src, dst);
        }
    }
    Ok(())
}

/// Expands one channel to `(r, r, r, 1)`.
pub fn r_to_rrr1(source: &ImageData, destination: &mut ImageData) -> Result<(), ConversionError> {
    expect_channels("source", source, 1)?;
    expect_channels("destination", destination, 4)?;
    convert(source, destination, |src, dst| {
        dst.copy_from_slice(&[src[0], src[0], src[0], 1.0]);
    })
}

/// Expands two channels to `(r, g, 0, 1)`.
pub fn rg_to_rg01(source: &ImageData, destination: &mut ImageData) -> Result<(), ConversionError> {
    expect_channels("source", source, 2)?;
    expect_channels("destination", destination, 4)?;
    convert(source, destination, |src, dst| {
        dst.copy_from_slice(&[src[0], src[1], 0.0, 1.0]);
    })
}

/// Copies pixels between images with the same channel count.
pub fn copy(source: &ImageData, destination: &mut ImageData) -> Result<(), ConversionError> {
    expect_channels("destination", destination, source.channel_count())?;
    convert(source, destination, |src, dst| dst.copy_from_slice(src))
}

/// Returns an RGBA copy of `source`, filling missing channels the way
/// [`r_to_rrr1`] and [`rg_to_rg01`] do. Three-channel images get alpha 1.
pub fn expand_to_rgba(source: &ImageData) -> Result<ImageData, ConversionError> {
    let mip_chain = source.mip_level_count() > 1;
    let mut rgba = ImageData::new(source.width(), source.height(), 4, mip_chain)?;
    match source.channel_count() {
        1 => r_to_rrr1(source, &mut rgba)?,
        2 => rg_to_rg01(source, &mut rgba)?,
        3 => convert(source, &mut rgba, |src, dst| {
            dst.copy_from_slice(&[src[0], src[1], src[2], 1.0]);
        })?,
        4 => copy(source, &mut rgba)?,
        actual => {
            return Err(ConversionError::ChannelCount {
                role: "source",
                expected: 4,
                actual,
            })
        }
    }
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gray(values: &[f32]) -> ImageData {
        let mut image = ImageData::new(2, 2, 1, false).unwrap();
        image.pixels_mut(0).copy_from_slice(values);
        image
    }

    #[test]
    fn test_r_to_rrr1() {
        let source = gray(&[0.1, 0.2, 0.3, 0.4]);
        let mut destination = ImageData::new(2, 2, 4, false).unwrap();
        r_to_rrr1(&source, &mut destination).unwrap();
        assert_eq!(&destination.pixels(0)[..8], &[0.1, 0.1, 0.1, 1.0, 0.2, 0.2, 0.2, 1.0]);
    }

    #[test]
    fn test_rg_to_rg01() {
        let mut source = ImageData::new(1, 1, 2, false).unwrap();
        source.pixels_mut(0).copy_from_slice(&[0.25, 0.75]);
        let mut destination = ImageData::new(1, 1, 4, false).unwrap();
        rg_to_rg01(&source, &mut destination).unwrap();
        assert_eq!(destination.pixels(0), &[0.25, 0.75, 0.0, 1.0]);
    }

    #[test]
    fn test_copy_requires_matching_channels() {
        let source = gray(&[0.0; 4]);
        let mut destination = ImageData::new(2, 2, 4, false).unwrap();
        let err = copy(&source, &mut destination).unwrap_err();
        assert_eq!(
            err,
            ConversionError::ChannelCount {
                role: "destination",
                expected: 1,
                actual: 4
            }
        );
    }

    #[test]
    fn test_mip_counts_must_match() {
        let source = gray(&[0.0; 4]);
        let mut destination = ImageData::new(2, 2, 4, true).unwrap();
        assert!(matches!(
            r_to_rrr1(&source, &mut destination),
            Err(ConversionError::MipCount { .. })
        ));
    }

    #[test]
    fn test_expand_keeps_every_level() {
        let mut source = ImageData::new(4, 4, 1, true).unwrap();
        source.pixels_mut(0).fill(0.5);
        source.generate_mips(0);
        let rgba = expand_to_rgba(&source).unwrap();
        assert_eq!(rgba.mip_level_count(), 3);
        assert_eq!(rgba.pixels(2), &[0.5, 0.5, 0.5, 1.0]);
    }
}
