//! Float image buffer with an optional mip chain.

use tessel_recipe::MAX_IMAGE_DIMENSION;
use thiserror::Error;

/// Errors from image buffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Number of `f32` values in a `width x height` level with `channels`
/// interleaved channels, or `None` if it does not fit in `usize`.
pub fn buffer_len(width: u32, height: u32, channels: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(channels as usize)
}

/// Row-major interleaved `f32` pixels for every mip level.
///
/// Level 0 has the requested size; each following level halves both
/// dimensions (floored, minimum 1) down to 1x1. Without a mip chain only
/// level 0 exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    width: u32,
    height: u32,
    channels: u32,
    levels: Vec<Vec<f32>>,
}

impl ImageData {
    /// Allocates a zeroed image.
    pub fn new(width: u32, height: u32, channels: u32, mip_chain: bool) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions(format!(
                "image must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(ImageError::InvalidDimensions(format!(
                "image {}x{} exceeds the {} pixel limit per side",
                width, height, MAX_IMAGE_DIMENSION
            )));
        }
        if channels == 0 || channels > 4 {
            return Err(ImageError::InvalidDimensions(format!(
                "image needs 1 to 4 channels, got {}",
                channels
            )));
        }

        let mut levels = Vec::new();
        let (mut w, mut h) = (width, height);
        let mut first = true;
        while (first || mip_chain) && (w > 1 || h > 1) {
            let len = buffer_len(w, h, channels).ok_or_else(|| {
                ImageError::InvalidDimensions(format!("{}x{}x{} overflows the buffer size", w, h, channels))
            })?;
            levels.push(vec![0.0; len]);
            first = false;
            w = (w >> 1).max(1);
            h = (h >> 1).max(1);
        }
        if mip_chain || levels.is_empty() {
            levels.push(vec![0.0; channels as usize]);
        }

        Ok(Self {
            width,
            height,
            channels,
            levels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channel_count(&self) -> u32 {
        self.channels
    }

    pub fn mip_level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Dimensions of a mip level.
    pub fn dimensions(&self, level: u32) -> (u32, u32) {
        ((self.width >> level).max(1), (self.height >> level).max(1))
    }

    /// Pixels of a mip level.
    ///
    /// # Panics
    ///
    /// Panics if `level` is not below [`mip_level_count`](Self::mip_level_count).
    pub fn pixels(&self, level: u32) -> &[f32] {
        &self.levels[level as usize]
    }

    /// Mutable pixels of a mip level.
    ///
    /// # Panics
    ///
    /// Panics if `level` is not below [`mip_level_count`](Self::mip_level_count).
    pub fn pixels_mut(&mut self, level: u32) -> &mut [f32] {
        &mut self.levels[level as usize]
    }

    /// Reads one channel of one pixel.
    pub fn get(&self, level: u32, x: u32, y: u32, channel: u32) -> f32 {
        let (w, _) = self.dimensions(level);
        let texel = y as usize * w as usize + x as usize;
        self.pixels(level)[texel * self.channels as usize + channel as usize]
    }

    /// Rebuilds every level after `base` by 2x2 box filtering its predecessor.
    pub fn generate_mips(&mut self, base: u32) {
        let channels = self.channels as usize;
        for level in (base + 1)..self.mip_level_count() {
            let (src_w, src_h) = self.dimensions(level - 1);
            let (dst_w, dst_h) = self.dimensions(level);
            let (head, tail) = self.levels.split_at_mut(level as usize);
            let source = &head[level as usize - 1];
            let destination = &mut tail[0];

            let src_w = src_w as usize;
            let src_h = src_h as usize;
            for y in 0..dst_h as usize {
                let y0 = (y * 2).min(src_h - 1);
                let y1 = (y * 2 + 1).min(src_h - 1);
                for x in 0..dst_w as usize {
                    let x0 = (x * 2).min(src_w - 1);
                    let x1 = (x * 2 + 1).min(src_w - 1);
                    for c in 0..channels {
                        let at = |px: usize, py: usize| source[(py * src_w + px) * channels + c];
                        let top = at(x0, y0) + at(x1, y0);
                        let bottom = at(x0, y1) + at(x1, y1);
                        destination[(y * dst_w as usize + x) * channels + c] = (top + bottom) * 0.25;
                    }
                }
            }
        }
    }

    /// BLAKE3 hex digest of every level's little-endian pixel bytes.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.width.to_le_bytes());
        hasher.update(&self.height.to_le_bytes());
        hasher.update(&self.channels.to_le_bytes());
        for level in &self.levels {
            for value in level {
                hasher.update(&value.to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_mip_chain_has_one_level() {
        let image = ImageData::new(64, 32, 1, false).unwrap();
        assert_eq!(image.mip_level_count(), 1);
        assert_eq!(image.pixels(0).len(), 64 * 32);
        assert!(image.pixels(0).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_mip_chain_halves_to_one() {
        let image = ImageData::new(16, 4, 2, true).unwrap();
        let dims: Vec<(u32, u32)> = (0..image.mip_level_count())
            .map(|l| image.dimensions(l))
            .collect();
        assert_eq!(dims, vec![(16, 4), (8, 2), (4, 1), (2, 1), (1, 1)]);
        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            assert_eq!(image.pixels(level).len(), (w * h * 2) as usize);
        }
    }

    #[test]
    fn test_dimensions_monotonic_halving() {
        let image = ImageData::new(100, 37, 1, true).unwrap();
        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            assert_eq!(w, (100 >> level).max(1));
            assert_eq!(h, (37 >> level).max(1));
        }
        assert_eq!(image.dimensions(image.mip_level_count() - 1), (1, 1));
    }

    #[test]
    fn test_single_pixel_image() {
        let flat = ImageData::new(1, 1, 4, false).unwrap();
        assert_eq!(flat.mip_level_count(), 1);
        let chained = ImageData::new(1, 1, 4, true).unwrap();
        assert_eq!(chained.mip_level_count(), 1);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(ImageData::new(0, 4, 1, false).is_err());
        assert!(ImageData::new(4, 4, 0, false).is_err());
    }

    #[test]
    fn test_oversized_image_rejected_before_allocating() {
        let err = ImageData::new(40000, 40000, 4, false).unwrap_err();
        assert!(matches!(err, ImageError::InvalidDimensions(_)));
        assert!(ImageData::new(MAX_IMAGE_DIMENSION + 1, 1, 1, false).is_err());
        assert!(ImageData::new(4, 4, 5, false).is_err());
    }

    #[test]
    fn test_buffer_len_checks_overflow() {
        assert_eq!(buffer_len(16384, 16384, 4), Some(16384 * 16384 * 4));
        assert_eq!(buffer_len(3, 2, 2), Some(12));
        if usize::BITS == 64 {
            assert_eq!(buffer_len(u32::MAX, u32::MAX, 4), None);
        }
    }

    #[test]
    fn test_box_filter_two_by_two() {
        let mut image = ImageData::new(2, 2, 1, true).unwrap();
        image.pixels_mut(0).copy_from_slice(&[0.1, 0.5, 0.3, 0.9]);
        image.generate_mips(0);
        let expected = (0.1 + 0.5 + 0.3 + 0.9) / 4.0;
        assert!((image.pixels(1)[0] - expected).abs() < 0.001);
    }

    #[test]
    fn test_box_filter_per_channel() {
        let mut image = ImageData::new(2, 2, 2, true).unwrap();
        image
            .pixels_mut(0)
            .copy_from_slice(&[1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        image.generate_mips(0);
        assert_eq!(image.pixels(1), &[1.0, 0.5]);
    }

    #[test]
    fn test_box_filter_narrow_source() {
        let mut image = ImageData::new(1, 4, 1, true).unwrap();
        image.pixels_mut(0).copy_from_slice(&[1.0, 3.0, 5.0, 7.0]);
        image.generate_mips(0);
        assert_eq!(image.pixels(1), &[2.0, 6.0]);
        assert_eq!(image.pixels(2), &[4.0]);
    }

    #[test]
    fn test_generate_mips_keeps_base() {
        let mut image = ImageData::new(4, 4, 1, true).unwrap();
        image.pixels_mut(0).fill(0.25);
        image.pixels_mut(1).fill(1.0);
        image.generate_mips(1);
        assert_eq!(image.pixels(1), &[1.0; 4]);
        assert_eq!(image.pixels(2), &[1.0]);
    }

    #[test]
    fn test_content_hash_tracks_pixels() {
        let mut a = ImageData::new(4, 4, 1, false).unwrap();
        let b = a.clone();
        assert_eq!(a.content_hash(), b.content_hash());
        a.pixels_mut(0)[3] = 0.5;
        assert_ne!(a.content_hash(), b.content_hash());
        assert_eq!(a.content_hash().len(), 64);
    }
}
