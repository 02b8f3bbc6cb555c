//! Sparse-convolution Gabor noise.
//!
//! Each cell holds a Poisson-distributed number of impulses, each a Gabor
//! kernel (a Gaussian envelope times a cosine wave) with random weight,
//! orientation and frequency.

use tessel_recipe::{GaborNoiseParams, TilingMode};

use super::TextureGenerator;
use crate::image::ImageData;
use crate::rng::DeterministicRng;
use crate::tiling::{IndexProvider, TilingIndex};

/// Gaussian envelope times a cosine wave along `orientation`.
#[inline]
pub(crate) fn gabor_kernel(width: f32, x: f32, y: f32, frequency: f32, orientation: f32) -> f32 {
    let envelope = (-width * x.mul_add(x, y * y)).exp();
    let wave = (frequency * x.mul_add(orientation.cos(), y * orientation.sin())).cos();
    envelope * wave
}

/// One kernel placed inside a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    /// Position in `[0, 1]` relative to the cell corner.
    pub x: f32,
    pub y: f32,
    pub weight: f32,
    pub orientation: f32,
    pub frequency: f32,
}

/// Single-channel Gabor noise.
#[derive(Debug, Clone)]
pub struct GaborNoise {
    params: GaborNoiseParams,
    provider: IndexProvider,
}

impl GaborNoise {
    pub fn new(params: &GaborNoiseParams, tiling: TilingMode, width: u32) -> Self {
        Self {
            params: params.clone(),
            provider: IndexProvider::for_mode(tiling, params.cells_per_row(width)),
        }
    }

    /// Impulses of cell `(i, j)`. Cells that share a canonical index share
    /// their impulses.
    pub fn impulses(&self, i: i32, j: i32) -> impl Iterator<Item = Impulse> + '_ {
        let p = &self.params;
        let mut rng = DeterministicRng::new(p.cell_offset.wrapping_add(self.provider.index(i, j)));
        let count = rng.poisson(p.impulses_per_cell as f32).min(p.impulses_per_cell_cap);
        (0..count).map(move |_| Impulse {
            x: rng.uniform(),
            y: rng.uniform(),
            weight: rng.uniform_range(-1.0, 1.0),
            orientation: rng.uniform_range(p.orientation_min, p.orientation_max),
            frequency: rng.uniform_range(p.frequency_min, p.frequency_max),
        })
    }

    fn cell_sum(&self, i: i32, j: i32, x: f32, y: f32) -> f32 {
        let p = &self.params;
        self.impulses(i, j)
            .map(|impulse| {
                impulse.weight
                    * gabor_kernel(
                        p.gaussian_width,
                        (x - impulse.x) * p.cell_size,
                        (y - impulse.y) * p.cell_size,
                        impulse.frequency,
                        impulse.orientation,
                    )
            })
            .sum()
    }

    /// Value in `[0, 1]` at pixel position `(x, y)` in level-0 units.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let cell_size = self.params.cell_size;
        let scaled_x = x / cell_size;
        let scaled_y = y / cell_size;
        let fx = scaled_x - scaled_x.floor();
        let fy = scaled_y - scaled_y.floor();
        let ix = scaled_x as i32;
        let iy = scaled_y as i32;

        let mut sum = 0.0;
        for j in -1..=1 {
            for i in -1..=1 {
                sum += self.cell_sum(ix + i, iy + j, fx - i as f32, fy - j as f32);
            }
        }
        (self.params.gaussian_magnitude * sum).mul_add(0.5, 0.5).clamp(0.0, 1.0)
    }
}

impl TextureGenerator for GaborNoise {
    fn generate(&self, image: &mut ImageData) {
        let (width, height) = (image.width() as f32, image.height() as f32);
        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            tracing::debug!(level, width = w, height = h, "filling level");
            let scale_x = width / w as f32;
            let scale_y = height / h as f32;
            let pixels = image.pixels_mut(level);
            for y in 0..h {
                let sy = y as f32 * scale_y;
                for x in 0..w {
                    pixels[y as usize * w as usize + x as usize] = self.sample(x as f32 * scale_x, sy);
                }
            }
        }
    }
}
