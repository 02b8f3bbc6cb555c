//! Wavelet noise: value noise minus its own band-limited reconstruction.
//!
//! A `lattice_width x lattice_height` field of value noise is pushed through
//! a separable downsample/upsample pair; subtracting the result leaves only
//! the top octave. Mip levels sample that detail field directly until they
//! get as coarse as the lattice stride, at which point the rest of the chain
//! is box filtered.

use tessel_recipe::{Interpolation, TilingMode, ValueNoiseParams, WaveletNoiseParams};

use super::{bilerp, TextureGenerator, ValueNoise};
use crate::curve::{with_curve, WeightCurve};
use crate::image::{ImageData, ImageError};
use crate::lattice::{walk_level, AxisSampling, Edge};

const RADIUS: usize = 16;

const DOWNSAMPLE: [f32; 2 * RADIUS] = [
    0.000334, -0.001528, 0.000410, 0.003545, -0.000938, -0.008233, 0.002172, 0.019120,
    -0.005040, -0.044412, 0.011655, 0.103311, -0.025936, -0.243780, 0.033979, 0.655340,
    0.655340, 0.033979, -0.243780, -0.025936, 0.103311, 0.011655, -0.044412, -0.005040,
    0.019120, 0.002172, -0.008233, -0.000938, 0.003546, 0.000410, -0.001528, 0.000334,
];

const UPSAMPLE: [f32; 4] = [0.25, 0.75, 0.75, 0.25];

/// Halves `size` samples spaced `stride` apart. Taps outside the signal read
/// sample 0.
fn downsample(source: &[f32], destination: &mut [f32], size: usize, stride: usize) {
    let end = size * stride;
    for i in 0..size / 2 {
        let mut index = (2 * i).wrapping_sub(RADIUS).wrapping_mul(stride);
        let mut value = 0.0;
        for coefficient in DOWNSAMPLE {
            value += coefficient * source[if index >= end { 0 } else { index }];
            index = index.wrapping_add(stride);
        }
        destination[i * stride] = value;
    }
}

/// Doubles `size / 2` samples back to `size`.
fn upsample(source: &[f32], destination: &mut [f32], size: usize, stride: usize) {
    let end = (size / 2) * stride;
    let read = |index: usize| source[if index >= end { 0 } else { index }];
    for i in 0..size {
        let base = (i >> 1) * stride;
        let offset = i & 1;
        destination[i * stride] =
            UPSAMPLE[offset] * read(base) + UPSAMPLE[offset + 2] * read(base + stride);
    }
}

/// Wavelet noise over a `lattice_width x lattice_height` detail field.
#[derive(Debug, Clone)]
pub struct WaveletNoise {
    interpolation: Interpolation,
    width: u32,
    height: u32,
    detail: Vec<f32>,
}

impl WaveletNoise {
    /// Builds the detail field from linear value noise in `[-1, 1]` tiled with `tiling`.
    pub fn new(params: &WaveletNoiseParams, tiling: TilingMode) -> Result<Self, ImageError> {
        let (width, height) = (params.lattice_width, params.lattice_height);
        let base_params = ValueNoiseParams {
            lattice_width: width,
            lattice_height: height,
            interpolation: Interpolation::Linear,
            range_min: -1.0,
            range_max: 1.0,
            seed: params.seed,
        };
        let mut base = ImageData::new(width, height, 1, false)?;
        ValueNoise::new(&base_params, tiling).generate(&mut base);

        let mut detail = base.pixels(0).to_vec();
        let reconstructed = band_limit(&detail, width as usize, height as usize);
        for (value, low) in detail.iter_mut().zip(reconstructed) {
            *value -= low;
        }

        Ok(Self {
            interpolation: params.interpolation,
            width,
            height,
            detail,
        })
    }

    pub fn detail(&self) -> &[f32] {
        &self.detail
    }

    fn fill<C: WeightCurve>(&self, curve: C, image: &mut ImageData) {
        let cells = (self.width, self.height);
        let edges = (Edge::Wrap(self.width), Edge::Wrap(self.height));
        let row_len = self.width;
        let at = |x: u32, y: u32| self.detail[y as usize * row_len as usize + x as usize];

        for level in 0..image.mip_level_count() {
            let (w, h) = image.dimensions(level);
            let stride_x = AxisSampling::new(self.width, w).stride;
            let stride_y = AxisSampling::new(self.height, h).stride;
            if level > 0 && (w == stride_x || h == stride_y) {
                tracing::warn!(
                    level,
                    width = w,
                    height = h,
                    "wavelet detail too coarse, box filtering remaining levels"
                );
                image.generate_mips(level - 1);
                break;
            }

            tracing::debug!(level, width = w, height = h, stride_x, stride_y, "filling level");
            walk_level(image.pixels_mut(level), (w, h), cells, edges, |cell| {
                let value = bilerp(
                    curve,
                    cell,
                    at(cell.left, cell.top),
                    at(cell.right, cell.top),
                    at(cell.left, cell.bottom),
                    at(cell.right, cell.bottom),
                );
                value * 0.5 + 0.5
            });
        }
    }
}

impl TextureGenerator for WaveletNoise {
    fn generate(&self, image: &mut ImageData) {
        with_curve!(self.interpolation, |curve| self.fill(curve, image))
    }
}

/// Downsamples then upsamples every row, then every column.
fn band_limit(field: &[f32], width: usize, height: usize) -> Vec<f32> {
    let mut down = vec![0.0; field.len()];
    let mut up = vec![0.0; field.len()];

    for row in 0..height {
        let span = row * width..(row + 1) * width;
        downsample(&field[span.clone()], &mut down[span.clone()], width, 1);
        upsample(&down[span.clone()], &mut up[span], width, 1);
    }
    for column in 0..width {
        downsample(&up[column..], &mut down[column..], height, width);
        upsample(&down[column..], &mut up[column..], height, width);
    }

    up
}
