//! White noise from a per-pixel hash.
//!
//! The pixel coordinate is run through the 64 MD5 compression rounds, so
//! every mip level is independent noise and no tiling mode changes anything.

use super::TextureGenerator;
use crate::image::ImageData;

const SHIFTS: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

#[rustfmt::skip]
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Runs the MD5 rounds over a single block holding `(x, y, z, w)` and returns
/// the four state words without the final feed-forward.
pub fn hash_block(x: u32, y: u32, z: u32, w: u32) -> [u32; 4] {
    let mut data = [0u32; 16];
    data[..5].copy_from_slice(&[x, y, z, w, 0x8000_0000]);
    data[15] = 128;

    let (mut a, mut b, mut c, mut d) = (0x6745_2301u32, 0xefcd_ab89u32, 0x98ba_dcfeu32, 0x1032_5476u32);
    for i in 0..64 {
        let (f, g) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((d & b) | (!d & c), (5 * i + 1) & 0xF),
            2 => (b ^ c ^ d, (3 * i + 5) & 0xF),
            _ => (c ^ (b | !d), (7 * i) & 0xF),
        };
        let f = f.wrapping_add(a).wrapping_add(K[i]).wrapping_add(data[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(SHIFTS[i / 16][i % 4]));
    }
    [a, b, c, d]
}

/// White noise in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteNoise;

impl WhiteNoise {
    pub fn sample(x: u32, y: u32) -> f32 {
        (hash_block(x, y, 0, 0)[0] as f64 / u32::MAX as f64) as f32
    }
}

impl TextureGenerator for WhiteNoise {
    fn generate(&self, image: &mut ImageData) {
        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            tracing::debug!(level, width = w, height = h, "filling level");
            let pixels = image.pixels_mut(level);
            for y in 0..h {
                for x in 0..w {
                    pixels[y as usize * w as usize + x as usize] = Self::sample(x, y);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hash_is_pure() {
        assert_eq!(hash_block(3, 7, 0, 0), hash_block(3, 7, 0, 0));
        assert_ne!(hash_block(3, 7, 0, 0), hash_block(7, 3, 0, 0));
    }

    #[test]
    fn test_levels_share_coordinates() {
        let mut image = ImageData::new(8, 8, 1, true).unwrap();
        WhiteNoise.generate(&mut image);
        assert_eq!(image.get(0, 1, 2, 0), image.get(1, 1, 2, 0));
        assert_eq!(image.get(0, 0, 0, 0), WhiteNoise::sample(0, 0));
    }

    #[test]
    fn test_samples_spread_over_unit_range() {
        let samples: Vec<f32> = (0..64).flat_map(|y| (0..64).map(move |x| WhiteNoise::sample(x, y))).collect();
        assert!(samples.iter().all(|v| (0.0..=1.0).contains(v)));
        let mean = samples.iter().sum::<f32>() / samples.len() as f32;
        assert!((mean - 0.5).abs() < 0.05);
        assert!(samples.iter().any(|&v| v < 0.1));
        assert!(samples.iter().any(|&v| v > 0.9));
    }
}
